use crate::i18n::Language;

/// A quality certificate with a PDF scan served from the certificates directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certificate {
    pub id: &'static str,
    pub name: &'static str,
    pub title_en: &'static str,
    pub title_tr: &'static str,
    pub description_en: &'static str,
    pub description_tr: &'static str,
    /// File name inside `site.certificates_dir`
    pub file: &'static str,
    pub issuer: &'static str,
    pub valid_until: &'static str,
}

impl Certificate {
    pub fn title(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.title_en,
            Language::Tr => self.title_tr,
        }
    }

    pub fn description(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.description_en,
            Language::Tr => self.description_tr,
        }
    }

    /// Look a certificate up by its PDF file name
    pub fn by_file(file: &str) -> Option<&'static Certificate> {
        CERTIFICATES.iter().find(|c| c.file == file)
    }
}

pub static CERTIFICATES: &[Certificate] = &[
    Certificate {
        id: "1",
        name: "ISO 9001:2015",
        title_en: "Quality Management System",
        title_tr: "Kalite Yönetim Sistemi",
        description_en: "International standard for quality management systems",
        description_tr: "Kalite yönetim sistemleri için uluslararası standart",
        file: "iso-9001.pdf",
        issuer: "TÜV",
        valid_until: "2026",
    },
    Certificate {
        id: "2",
        name: "ISO 14001:2015",
        title_en: "Environmental Management System",
        title_tr: "Çevre Yönetim Sistemi",
        description_en: "International standard for environmental management",
        description_tr: "Çevre yönetimi için uluslararası standart",
        file: "iso-14001.pdf",
        issuer: "TÜV",
        valid_until: "2026",
    },
    Certificate {
        id: "3",
        name: "AS9100D",
        title_en: "Aerospace Quality Management",
        title_tr: "Havacılık Kalite Yönetimi",
        description_en: "Quality management standard for aerospace industry",
        description_tr: "Havacılık sektörü için kalite yönetim standardı",
        file: "as9100d.pdf",
        issuer: "TÜV",
        valid_until: "2026",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_file_matches_only_known_names() {
        assert_eq!(Certificate::by_file("as9100d.pdf").map(|c| c.id), Some("3"));
        assert!(Certificate::by_file("../config.toml").is_none());
        assert!(Certificate::by_file("ISO-9001.PDF").is_none());
    }

    #[test]
    fn test_localized_title() {
        let cert = &CERTIFICATES[0];
        assert_eq!(cert.title(Language::En), "Quality Management System");
        assert_eq!(cert.title(Language::Tr), "Kalite Yönetim Sistemi");
    }
}
