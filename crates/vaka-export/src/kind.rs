//! Document kinds and their letterhead.

use std::fmt;
use std::str::FromStr;

use crate::error::ExportError;

/// What the exported document is presented as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Court decision (`KARAR`) under a court letterhead.
    Decision,
    /// Prosecutor's indictment (`İDDİANAME`).
    Indictment,
    /// Plain document, no letterhead.
    #[default]
    Document,
}

impl DocumentKind {
    pub const ALL: [Self; 3] = [Self::Decision, Self::Indictment, Self::Document];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Decision => "decision",
            Self::Indictment => "indictment",
            Self::Document => "document",
        }
    }

    /// Letterhead block placed above the content. Empty for `Document`.
    #[must_use]
    pub const fn header_html(self) -> &'static str {
        match self {
            Self::Decision => concat!(
                "<div class=\"header\">\n",
                "  <h1>TÜRKİYE CUMHURİYETİ</h1>\n",
                "  <h2>... MAHKEMESİ</h2>\n",
                "  <h3>KARAR</h3>\n",
                "  <p>Esas No: ... | Karar No: ...</p>\n",
                "</div>\n",
            ),
            Self::Indictment => concat!(
                "<div class=\"header\">\n",
                "  <h1>CUMHURİYET BAŞSAVCILIĞI</h1>\n",
                "  <h2>İDDİANAME</h2>\n",
                "  <p>Esas No: ... | Tarih: ...</p>\n",
                "</div>\n",
            ),
            Self::Document => "",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = ExportError;

    /// Accepts the English names and the Turkish `karar`, `iddianame`,
    /// `belge`, in any case.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "decision" | "karar" => Ok(Self::Decision),
            "indictment" | "iddianame" => Ok(Self::Indictment),
            "document" | "belge" => Ok(Self::Document),
            _ => Err(ExportError::UnknownKind(raw.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("decision", DocumentKind::Decision)]
    #[case("KARAR", DocumentKind::Decision)]
    #[case("Indictment", DocumentKind::Indictment)]
    #[case("iddianame", DocumentKind::Indictment)]
    #[case(" document ", DocumentKind::Document)]
    #[case("belge", DocumentKind::Document)]
    fn parses_known_names(#[case] raw: &str, #[case] expected: DocumentKind) {
        assert_eq!(raw.parse::<DocumentKind>().unwrap(), expected);
    }

    #[test]
    fn unknown_kind_is_an_error() {
        assert!(matches!(
            "memo".parse::<DocumentKind>(),
            Err(ExportError::UnknownKind(raw)) if raw == "memo"
        ));
    }

    #[test]
    fn display_roundtrips_through_parse() {
        for kind in DocumentKind::ALL {
            assert_eq!(kind.to_string().parse::<DocumentKind>().unwrap(), kind);
        }
    }

    #[test]
    fn only_plain_documents_have_no_letterhead() {
        assert!(DocumentKind::Document.header_html().is_empty());
        assert!(DocumentKind::Decision.header_html().contains("KARAR"));
        assert!(DocumentKind::Indictment.header_html().contains("İDDİANAME"));
    }
}
