pub mod mock_transport;
pub mod mock_tts;

use quitanda::config::{Config, Dtmf3Action};
use quitanda::intent::KeywordClassifier;
use quitanda::session::SessionController;
use std::path::Path;

/// Controller with the production classifier and default digit-3 behavior
pub fn controller() -> SessionController {
    SessionController::new(Box::new(KeywordClassifier::new()), Dtmf3Action::Transfer)
}

/// Config pointing transcript output at a temp directory, with synthesis
/// and webhook disabled
pub fn test_config(transcript_dir: &Path) -> Config {
    Config {
        tts_engine: "null".to_string(),
        transcript_dir: transcript_dir.to_string_lossy().to_string(),
        ..Config::default()
    }
}
