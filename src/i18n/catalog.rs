//! Translation catalogue
//!
//! One row per key: `(key, english, turkish)`. Placeholders such as `{min}`
//! are filled in by the caller.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::Language;

pub static ENTRIES: &[(&str, &str, &str)] = &[
    // navigation
    ("nav.home", "Home", "Ana Sayfa"),
    ("nav.about", "About Us", "Hakkımızda"),
    ("nav.missionVision", "Mission & Vision", "Misyon & Vizyon"),
    ("nav.services", "Services", "Hizmetler"),
    ("nav.capabilities", "Capabilities", "Kabiliyetler"),
    ("nav.references", "References", "Referanslar"),
    ("nav.gallery", "Gallery", "Galeri"),
    ("nav.certificates", "Certificates", "Sertifikalar"),
    ("nav.contact", "Contact", "İletişim"),
    ("nav.menu", "Menu", "Menü"),
    ("nav.language", "Language", "Dil"),
    ("nav.quote", "Get a Quote", "Teklif Alın"),
    // footer
    (
        "footer.tagline",
        "Delivering precision CNC machining solutions for industries worldwide.",
        "Dünya genelindeki sektörlere hassas CNC işleme çözümleri sunuyoruz.",
    ),
    ("footer.quickLinks", "Quick Links", "Hızlı Bağlantılar"),
    ("footer.services", "Services", "Hizmetler"),
    ("footer.contact", "Contact", "İletişim"),
    ("footer.address", "Industrial Zone A, Block 7, 34956 Istanbul, Turkey", "Sanayi Bölgesi A, Blok 7, 34956 İstanbul, Türkiye"),
    ("footer.hours", "Mon - Fri: 08:00 - 18:00, Sat: 08:00 - 13:00", "Pzt - Cum: 08:00 - 18:00, Cmt: 08:00 - 13:00"),
    ("footer.rights", "All rights reserved.", "Tüm hakları saklıdır."),
    // home
    ("home.title", "Precision CNC Machining", "Hassas CNC İşleme"),
    (
        "home.hero.subtitle",
        "From prototypes to production runs, we deliver machined components with consistency and precision.",
        "Prototipten seri üretime, işlenmiş parçaları tutarlılık ve hassasiyetle teslim ediyoruz.",
    ),
    ("home.hero.cta", "Request a Quote", "Teklif İsteyin"),
    ("home.hero.secondary", "Our Services", "Hizmetlerimiz"),
    ("home.stats.years", "Years of Excellence", "Yıllık Tecrübe"),
    ("home.stats.machines", "CNC Machines", "CNC Tezgah"),
    ("home.stats.clients", "Satisfied Clients", "Memnun Müşteri"),
    ("home.stats.tolerance", "Tolerance", "Tolerans"),
    ("home.why.title", "Why Choose EMAS Metal?", "Neden EMAS Metal?"),
    ("home.why.precision", "Precision Engineering", "Hassas Mühendislik"),
    ("home.why.precisionText", "Tolerances down to ±0.005mm with advanced metrology verification.", "Gelişmiş metroloji doğrulamasıyla ±0,005 mm'ye kadar tolerans."),
    ("home.why.turnaround", "Fast Turnaround", "Hızlı Teslimat"),
    ("home.why.turnaroundText", "From quote to delivery in as little as 5 business days.", "Tekliften teslimata 5 iş günü gibi kısa sürede."),
    ("home.why.materials", "Material Expertise", "Malzeme Uzmanlığı"),
    ("home.why.materialsText", "Aluminum, steel, titanium, Inconel, plastics and more.", "Alüminyum, çelik, titanyum, Inconel, plastik ve daha fazlası."),
    ("home.why.quality", "Quality Certified", "Sertifikalı Kalite"),
    ("home.why.qualityText", "ISO 9001:2015 certified with full traceability.", "Tam izlenebilirlik ile ISO 9001:2015 sertifikalı."),
    ("home.industries.title", "Industries We Serve", "Hizmet Verdiğimiz Sektörler"),
    ("home.cta.title", "Ready to start your project?", "Projenize başlamaya hazır mısınız?"),
    ("home.cta.text", "Send us your drawings and get a quote within 48 hours.", "Çizimlerinizi gönderin, 48 saat içinde teklif alın."),
    // about
    ("about.title", "About EMAS Metal", "EMAS Metal Hakkında"),
    (
        "about.intro",
        "For more than 15 years we have machined critical components for energy, automotive, rail and aerospace customers.",
        "15 yılı aşkın süredir enerji, otomotiv, raylı sistemler ve havacılık müşterileri için kritik parçalar işliyoruz.",
    ),
    ("about.history.title", "Our Story", "Hikayemiz"),
    (
        "about.history.text",
        "Founded in Istanbul as a small turning workshop, EMAS Metal has grown into a multi-axis machining plant with its own quality laboratory.",
        "İstanbul'da küçük bir torna atölyesi olarak kurulan EMAS Metal, kendi kalite laboratuvarına sahip çok eksenli bir işleme tesisine dönüştü.",
    ),
    ("about.team.title", "Our Team", "Ekibimiz"),
    (
        "about.team.text",
        "Engineers, programmers and operators work side by side from design review to final inspection.",
        "Mühendisler, programcılar ve operatörler tasarım incelemesinden son muayeneye kadar birlikte çalışır.",
    ),
    // mission & vision
    ("mission.title", "Mission & Vision", "Misyon & Vizyon"),
    ("mission.mission.title", "Our Mission", "Misyonumuz"),
    (
        "mission.mission.text",
        "To deliver precise, reliable parts on time, every time, and to be the machining partner our customers trust.",
        "Hassas ve güvenilir parçaları her zaman zamanında teslim etmek ve müşterilerimizin güvendiği işleme ortağı olmak.",
    ),
    ("mission.vision.title", "Our Vision", "Vizyonumuz"),
    (
        "mission.vision.text",
        "To be a leading precision machining company in the region, known for quality, technology and sustainable production.",
        "Kalite, teknoloji ve sürdürülebilir üretimle tanınan, bölgenin önde gelen hassas işleme firması olmak.",
    ),
    ("mission.values.title", "Our Values", "Değerlerimiz"),
    ("mission.values.quality", "Quality", "Kalite"),
    ("mission.values.reliability", "Reliability", "Güvenilirlik"),
    ("mission.values.innovation", "Innovation", "Yenilikçilik"),
    ("mission.values.sustainability", "Sustainability", "Sürdürülebilirlik"),
    // services
    ("services.title", "Our Services", "Hizmetlerimiz"),
    (
        "services.intro",
        "Complete machining services from a single supplier.",
        "Tek tedarikçiden eksiksiz işleme hizmetleri.",
    ),
    ("services.milling.title", "CNC Milling", "CNC Frezeleme"),
    ("services.milling.text", "High-precision 3, 4 and 5-axis milling for complex geometries.", "Karmaşık geometriler için yüksek hassasiyetli 3, 4 ve 5 eksen frezeleme."),
    ("services.turning.title", "CNC Turning", "CNC Tornalama"),
    ("services.turning.text", "Multi-axis turning centers with live tooling.", "Canlı takımlı çok eksenli torna merkezleri."),
    ("services.prototyping.title", "Rapid Prototyping", "Hızlı Prototipleme"),
    ("services.prototyping.text", "Fast turnaround prototypes to validate designs before production.", "Üretim öncesi tasarımları doğrulamak için hızlı prototipler."),
    ("services.assembly.title", "Assembly Services", "Montaj Hizmetleri"),
    ("services.assembly.text", "Sub-assembly and kitting of machined components.", "İşlenmiş parçaların alt montajı ve kitlenmesi."),
    ("services.inspection.title", "Quality Inspection", "Kalite Kontrol"),
    ("services.inspection.text", "CMM inspection and full quality documentation.", "CMM ölçümü ve eksiksiz kalite dokümantasyonu."),
    ("services.finishing.title", "Surface Finishing", "Yüzey İşlemleri"),
    ("services.finishing.text", "Anodizing, coating and plating through qualified partners.", "Onaylı ortaklar aracılığıyla eloksal, kaplama ve boya."),
    // capabilities
    ("capabilities.title", "Capabilities", "Kabiliyetlerimiz"),
    ("capabilities.intro", "Modern equipment and proven processes.", "Modern ekipman ve kanıtlanmış süreçler."),
    ("capabilities.machines", "Machine Park", "Makine Parkuru"),
    ("capabilities.machine", "Machine", "Tezgah"),
    ("capabilities.type", "Type", "Tip"),
    ("capabilities.specs", "Specifications", "Özellikler"),
    ("capabilities.qty", "Qty", "Adet"),
    ("capabilities.materials", "Materials", "Malzemeler"),
    ("capabilities.tolerances", "Tolerances", "Toleranslar"),
    ("capabilities.feature", "Feature", "Özellik"),
    ("capabilities.standard", "Standard", "Standart"),
    ("capabilities.precision", "Precision", "Hassas"),
    ("capabilities.highPrecision", "High Precision", "Yüksek Hassas"),
    // references
    ("references.title", "Our References", "Referanslarımız"),
    ("references.intro", "Companies that trust our parts.", "Parçalarımıza güvenen firmalar."),
    ("references.allIndustries", "All Industries", "Tüm Sektörler"),
    ("references.visit", "Visit website", "Web sitesini ziyaret et"),
    ("references.empty", "No references found for this industry.", "Bu sektör için referans bulunamadı."),
    // gallery
    ("gallery.title", "Gallery", "Galeri"),
    ("gallery.intro", "A look at our parts and production floor.", "Parçalarımıza ve üretim alanımıza bir bakış."),
    ("gallery.category.All", "All", "Tümü"),
    ("gallery.category.Milling", "Milling", "Frezeleme"),
    ("gallery.category.Turning", "Turning", "Tornalama"),
    ("gallery.category.Parts", "Parts", "Parçalar"),
    ("gallery.category.Factory", "Factory", "Fabrika"),
    ("gallery.empty", "No items in this category.", "Bu kategoride öğe yok."),
    ("gallery.back", "Back to gallery", "Galeriye dön"),
    ("gallery.category", "Category", "Kategori"),
    // certificates
    ("certificates.title", "Certificates", "Sertifikalar"),
    ("certificates.intro", "Our quality and management systems are independently certified.", "Kalite ve yönetim sistemlerimiz bağımsız olarak belgelendirilmiştir."),
    ("certificates.issuer", "Issued by", "Veren kuruluş"),
    ("certificates.validUntil", "Valid until", "Geçerlilik"),
    ("certificates.view", "View", "Görüntüle"),
    ("certificates.download", "Download", "İndir"),
    // contact
    ("contact.title", "Contact Us", "Bize Ulaşın"),
    ("contact.intro", "Tell us about your project. We answer within one business day.", "Projenizden bahsedin. Bir iş günü içinde yanıt veriyoruz."),
    ("contact.form.name", "Full Name", "Ad Soyad"),
    ("contact.form.company", "Company", "Firma"),
    ("contact.form.email", "Email", "E-posta"),
    ("contact.form.phone", "Phone", "Telefon"),
    ("contact.form.message", "Message", "Mesaj"),
    ("contact.form.attachment", "Technical drawing (optional)", "Teknik çizim (isteğe bağlı)"),
    ("contact.form.attachmentHint", "{types}, up to {max} MB", "{types}, en fazla {max} MB"),
    ("contact.form.submit", "Send Message", "Mesaj Gönder"),
    ("contact.success.title", "Thank you!", "Teşekkürler!"),
    ("contact.success.text", "Your message has been sent. We will get back to you shortly.", "Mesajınız gönderildi. En kısa sürede size dönüş yapacağız."),
    ("contact.success.again", "Send another message", "Yeni mesaj gönder"),
    ("contact.error.generic", "Your message could not be sent. Please try again later.", "Mesajınız gönderilemedi. Lütfen daha sonra tekrar deneyin."),
    ("contact.error.dismiss", "Dismiss", "Kapat"),
    ("contact.error.nameRequired", "Name is required", "Ad soyad zorunludur"),
    ("contact.error.emailRequired", "Email is required", "E-posta zorunludur"),
    ("contact.error.emailInvalid", "Please enter a valid email address", "Lütfen geçerli bir e-posta adresi girin"),
    ("contact.error.messageRequired", "Message is required", "Mesaj zorunludur"),
    ("contact.error.messageTooShort", "Message must be at least {min} characters", "Mesaj en az {min} karakter olmalıdır"),
    ("contact.error.required", "This field is required", "Bu alan zorunludur"),
    ("contact.error.tooLong", "Must be at most {max} characters", "En fazla {max} karakter olabilir"),
    ("contact.error.fileType", "Allowed file types: {types}", "İzin verilen dosya türleri: {types}"),
    ("contact.error.fileTooLarge", "File must be smaller than {max} MB", "Dosya {max} MB'den küçük olmalıdır"),
    ("contact.info.phone", "Phone", "Telefon"),
    ("contact.info.email", "Email", "E-posta"),
    ("contact.info.address", "Address", "Adres"),
    ("contact.info.hours", "Working Hours", "Çalışma Saatleri"),
    // errors
    ("error.notFound.title", "Page not found", "Sayfa bulunamadı"),
    ("error.notFound.text", "The page you are looking for does not exist.", "Aradığınız sayfa mevcut değil."),
    ("error.generic.title", "Something went wrong", "Bir şeyler ters gitti"),
    ("error.back", "Back to home", "Ana sayfaya dön"),
];

static INDEX: Lazy<HashMap<&'static str, (&'static str, &'static str)>> = Lazy::new(|| {
    ENTRIES
        .iter()
        .map(|(key, en, tr)| (*key, (*en, *tr)))
        .collect()
});

/// Translated text for `key`, if the catalogue has it
pub fn lookup(lang: Language, key: &str) -> Option<&'static str> {
    INDEX.get(key).map(|(en, tr)| match lang {
        Language::En => *en,
        Language::Tr => *tr,
    })
}

/// Translated text for `key`; unknown keys render as the key itself
pub fn t<'a>(lang: Language, key: &'a str) -> &'a str {
    lookup(lang, key).unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_entry_is_translated() {
        for (key, en, tr) in ENTRIES {
            assert!(!en.is_empty(), "{} has no English text", key);
            assert!(!tr.is_empty(), "{} has no Turkish text", key);
        }
    }

    #[test]
    fn test_keys_are_unique() {
        let mut seen = HashSet::new();
        for (key, _, _) in ENTRIES {
            assert!(seen.insert(*key), "duplicate key {}", key);
        }
    }

    #[test]
    fn test_missing_key_renders_key() {
        assert_eq!(t(Language::En, "nav.home"), "Home");
        assert_eq!(t(Language::Tr, "nav.home"), "Ana Sayfa");
        assert_eq!(t(Language::Tr, "does.not.exist"), "does.not.exist");
    }
}
