use std::{io::Write, path::PathBuf};

use gemini_transcriber::{Transcriber, TranscriberError};

/// Render one transcription outcome the way the diary bot replied
pub fn render(outcome: &Result<Option<String>, TranscriberError>) -> String {
    match outcome {
        Ok(Some(text)) => format!("✅ Transcription:\n\n{text}"),
        Ok(None) => "❌ Failed to transcribe audio. Please try again.".to_owned(),
        Err(e) => format!("❌ Error: {e}"),
    }
}

/// Transcribe `files` one after another, writing each rendered result to `out`
///
/// Returns `true` only if every file produced a transcript. The files are
/// never removed; their lifecycle belongs to whoever created them.
pub async fn transcribe_all(
    transcriber: &Transcriber,
    files: &[PathBuf],
    prompt: &str,
    out: &mut impl Write,
) -> std::io::Result<bool> {
    let mut all_transcribed = true;
    let labelled = files.len() > 1;

    for (i, file) in files.iter().enumerate() {
        tracing::info!(file = %file.display(), "transcribing");

        let outcome = transcriber.transcribe(file, prompt).await;

        match &outcome {
            Ok(Some(_)) => {}
            Ok(None) => {
                tracing::warn!(file = %file.display(), "no transcript returned");
                all_transcribed = false;
            }
            Err(e) if e.is_caller_error() => {
                tracing::warn!(file = %file.display(), error = %e, "file rejected");
                all_transcribed = false;
            }
            Err(e) => {
                tracing::error!(file = %file.display(), error = %e, "transcription failed");
                all_transcribed = false;
            }
        }

        if i > 0 {
            writeln!(out)?;
        }
        if labelled {
            writeln!(out, "== {}", file.display())?;
        }
        writeln!(out, "{}", render(&outcome))?;
    }

    Ok(all_transcribed)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use gemini_transcriber::{ContentGenerator, ProviderError, TranscriptionRequest};
    use secrecy::SecretString;

    use super::*;

    /// Echoes the media type, or returns nothing for ogg files
    struct EchoGenerator;

    #[async_trait]
    impl ContentGenerator for EchoGenerator {
        fn name(&self) -> &str {
            "echo"
        }

        async fn generate(
            &self,
            request: &TranscriptionRequest,
            _api_key: &SecretString,
        ) -> Result<Option<String>, ProviderError> {
            match request.audio.media_type {
                "audio/ogg" => Ok(None),
                "audio/wav" => Err(ProviderError::Other("API Error".to_owned())),
                other => Ok(Some(format!("heard {other}"))),
            }
        }
    }

    fn transcriber() -> Transcriber {
        Transcriber::builder()
            .api_key(SecretString::from("test_key"))
            .provider(Arc::new(EchoGenerator))
            .build()
            .unwrap()
    }

    #[test]
    fn renders_each_outcome() {
        assert_eq!(render(&Ok(Some("Ami bhalo".to_owned()))), "✅ Transcription:\n\nAmi bhalo");
        assert_eq!(render(&Ok(None)), "❌ Failed to transcribe audio. Please try again.");

        let err = TranscriberError::UnsupportedFormat {
            path: PathBuf::from("notes.txt"),
        };
        assert_eq!(render(&Err(err)), "❌ Error: unsupported audio format: notes.txt");
    }

    #[tokio::test]
    async fn single_file_is_not_labelled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diary.mp3");
        std::fs::write(&path, b"x").unwrap();

        let mut out = Vec::new();
        let ok = transcribe_all(&transcriber(), &[path.clone()], "p", &mut out).await.unwrap();

        assert!(ok);
        assert_eq!(String::from_utf8(out).unwrap(), "✅ Transcription:\n\nheard audio/mp3\n");
        assert!(path.exists());
    }

    #[tokio::test]
    async fn mixed_outcomes_are_reported_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("a.flac");
        let silent = dir.path().join("b.ogg");
        let failing = dir.path().join("c.wav");
        for path in [&good, &silent, &failing] {
            std::fs::write(path, b"x").unwrap();
        }
        let missing = dir.path().join("d.mp3");

        let files = [good.clone(), silent.clone(), failing.clone(), missing.clone()];
        let mut out = Vec::new();
        let ok = transcribe_all(&transcriber(), &files, "p", &mut out).await.unwrap();

        assert!(!ok);
        let expected = format!(
            "== {}\n✅ Transcription:\n\nheard audio/flac\n\n\
             == {}\n❌ Failed to transcribe audio. Please try again.\n\n\
             == {}\n❌ Error: error transcribing audio: API Error\n\n\
             == {}\n❌ Error: audio file not found: {}\n",
            good.display(),
            silent.display(),
            failing.display(),
            missing.display(),
            missing.display(),
        );
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
