//! Batch preloading of high-frequency phrases.

use super::store::AudioCache;
use crate::synth::{SpeechSynthesizer, DEFAULT_SPEAKER};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// A phrase to synthesize and cache ahead of first demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    pub text: String,
    pub language: String,
    pub speaker: String,
}

impl Phrase {
    /// Creates a phrase with the default speaker.
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
            speaker: DEFAULT_SPEAKER.to_string(),
        }
    }

    pub fn with_speaker(mut self, speaker: impl Into<String>) -> Self {
        self.speaker = speaker.into();
        self
    }
}

/// Final accounting of a preload batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreloadOutcome {
    pub succeeded: usize,
    pub failed: usize,
}

impl AudioCache {
    /// Synthesizes each phrase in order and caches the results.
    ///
    /// One phrase's synthesis failure is logged and counted but never aborts
    /// or skips the rest of the batch; an all-failed batch is a valid outcome
    /// (`succeeded == 0`), not an error. The producer is always invoked
    /// outside the cache lock, so a slow synthesis call never blocks
    /// concurrent cache consumers.
    pub async fn preload<S>(&self, phrases: &[Phrase], producer: &S) -> PreloadOutcome
    where
        S: SpeechSynthesizer + ?Sized,
    {
        let mut succeeded = 0;
        let mut failed = 0;
        for phrase in phrases {
            match producer
                .synthesize(&phrase.text, &phrase.language, &phrase.speaker)
                .await
            {
                Ok(clip) => {
                    self.put(&phrase.text, &phrase.language, &phrase.speaker, clip);
                    succeeded += 1;
                    debug!(text = %phrase.text, language = %phrase.language, "preloaded phrase");
                }
                Err(e) => {
                    failed += 1;
                    warn!(
                        text = %phrase.text,
                        language = %phrase.language,
                        error = %e,
                        "failed to preload phrase"
                    );
                }
            }
        }
        info!(succeeded, failed, "preload batch complete");
        PreloadOutcome { succeeded, failed }
    }
}

/// High-frequency assistant phrases worth warming the cache with: short
/// supportive responses in English, Hindi, and Telugu, plus crisis-support
/// lines, all with the default speaker.
pub fn default_phrases() -> Vec<Phrase> {
    let english = [
        "Hi, how can I help you?",
        "I hear you",
        "That sounds tough",
        "I'm here for you",
        "How are you feeling?",
        "Tell me more about that",
        "I understand",
        "You're not alone",
        "That must be difficult",
        "I'm listening",
    ];

    let crisis = [
        "You're safe here. Let's talk about what's on your mind.",
        "I'm here to support you. What do you need right now?",
        "It's okay to not be okay. I'm here to listen.",
    ];

    let hindi = [
        "नमस्ते, मैं आपकी कैसे मदद कर सकता हूं?",
        "मैं आपकी बात सुन रहा हूं",
        "यह कठिन लग रहा है",
        "मैं यहां आपके लिए हूं",
        "आप कैसा महसूस कर रहे हैं?",
        "मुझे इसके बारे में और बताएं",
        "मैं समझ गया",
        "आप अकेले नहीं हैं",
        "यह मुश्किल होगा",
        "मैं सुन रहा हूं",
    ];

    let telugu = [
        "నమస్కారం, నేను మీకు ఎలా సహాయం చేయగలను?",
        "నేను మీ మాట వింటున్నాను",
        "అది కష్టంగా ఉండవచ్చు",
        "నేను మీ కోసం ఇక్కడ ఉన్నాను",
        "మీరు ఎలా భావిస్తున్నారు?",
        "దాని గురించి నాకు మరింత చెప్పండి",
        "నాకు అర్థమైంది",
        "మీరు ఒంటరిగా లేరు",
        "అది కష్టంగా ఉంటుంది",
        "నేను వింటున్నాను",
    ];

    english
        .iter()
        .chain(crisis.iter())
        .map(|text| Phrase::new(*text, "en"))
        .chain(hindi.iter().map(|text| Phrase::new(*text, "hi")))
        .chain(telugu.iter().map(|text| Phrase::new(*text, "te")))
        .collect()
}
