//! Supported audio containers and their transport media types

use std::path::Path;

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Audio container accepted for transcription
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, IntoStaticStr, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SupportedFormat {
    Mp3,
    M4a,
    Wav,
    Aiff,
    Ogg,
    Flac,
}

impl SupportedFormat {
    /// Parse a bare extension (no leading dot), ignoring ASCII case
    pub fn from_extension(extension: &str) -> Option<Self> {
        extension.parse().ok()
    }

    /// Format named by the text after the last `.` of a filename
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, extension) = filename.rsplit_once('.')?;
        Self::from_extension(extension)
    }

    /// Format of a filesystem path, judged by its name only
    pub fn from_path(path: &Path) -> Option<Self> {
        Self::from_filename(&path.to_string_lossy())
    }

    /// Canonical lowercase extension
    pub fn extension(self) -> &'static str {
        self.into()
    }

    /// Media type label sent with the inline audio payload
    pub fn media_type(self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mp3",
            Self::M4a => "audio/aac",
            Self::Wav => "audio/wav",
            Self::Aiff => "audio/aiff",
            Self::Ogg => "audio/ogg",
            Self::Flac => "audio/flac",
        }
    }

    /// Comma-separated uppercase list, e.g. for help text
    pub fn display_list() -> String {
        Self::iter()
            .map(|f| f.extension().to_ascii_uppercase())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Whether `filename` ends in a supported audio extension
///
/// Files without a `.` or with an empty extension are rejected.
pub fn is_valid_audio_file(filename: &str) -> bool {
    SupportedFormat::from_filename(filename).is_some()
}

/// Media type for a bare extension, or `None` when it is not supported
///
/// There is no default media type.
pub fn media_type_for(extension: &str) -> Option<&'static str> {
    SupportedFormat::from_extension(extension).map(SupportedFormat::media_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXTENSIONS: [&str; 6] = ["mp3", "m4a", "wav", "aiff", "ogg", "flac"];

    #[test]
    fn supported_extensions_any_case() {
        for ext in EXTENSIONS {
            assert!(is_valid_audio_file(&format!("name.{ext}")), "{ext}");
            assert!(is_valid_audio_file(&format!("name.{}", ext.to_uppercase())), "{ext}");
        }
        assert!(is_valid_audio_file("Song.M4A"));
        assert!(is_valid_audio_file("voice.FlAc"));
    }

    #[test]
    fn other_extensions_rejected() {
        for name in ["document.pdf", "image.jpg", "video.mp4", "text.txt"] {
            assert!(!is_valid_audio_file(name), "{name}");
        }
    }

    #[test]
    fn missing_or_empty_extension_rejected() {
        assert!(!is_valid_audio_file("noextension"));
        assert!(!is_valid_audio_file("trailing."));
        assert!(!is_valid_audio_file(""));
    }

    #[test]
    fn only_last_extension_counts() {
        assert!(is_valid_audio_file("diary.2024.ogg"));
        assert!(!is_valid_audio_file("diary.mp3.txt"));
        assert!(!is_valid_audio_file("mp3"));
    }

    #[test]
    fn extension_must_match_exactly() {
        assert!(!is_valid_audio_file("a.mp33"));
        assert!(!is_valid_audio_file("a. mp3"));
        assert!(!is_valid_audio_file("a.aif"));
    }

    #[test]
    fn path_uses_file_name() {
        assert_eq!(
            SupportedFormat::from_path(Path::new("/tmp/uploads/voice.OGG")),
            Some(SupportedFormat::Ogg)
        );
        assert_eq!(SupportedFormat::from_path(Path::new("/tmp/v1.0/recording")), None);
    }

    #[test]
    fn media_types() {
        assert_eq!(media_type_for("mp3"), Some("audio/mp3"));
        assert_eq!(media_type_for("M4A"), Some("audio/aac"));
        assert_eq!(media_type_for("wav"), Some("audio/wav"));
        assert_eq!(media_type_for("aiff"), Some("audio/aiff"));
        assert_eq!(media_type_for("ogg"), Some("audio/ogg"));
        assert_eq!(media_type_for("flac"), Some("audio/flac"));
        assert_eq!(media_type_for("txt"), None);
        assert_eq!(media_type_for(""), None);
    }

    #[test]
    fn extension_round_trips_through_display() {
        for format in SupportedFormat::iter() {
            assert_eq!(format.to_string(), format.extension());
            assert_eq!(SupportedFormat::from_extension(format.as_ref()), Some(format));
            assert!(EXTENSIONS.contains(&format.extension()));
        }
        assert_eq!(SupportedFormat::iter().count(), EXTENSIONS.len());
    }

    #[test]
    fn display_list_is_uppercase() {
        assert_eq!(SupportedFormat::display_list(), "MP3, M4A, WAV, AIFF, OGG, FLAC");
    }
}
