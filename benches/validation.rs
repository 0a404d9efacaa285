//! 联系表单验证性能基准测试

use criterion::{Criterion, criterion_group, criterion_main};
use emasmetal::models::Attachment;
use emasmetal::services::validation::{ContactForm, validate_contact, validate_form};
use std::hint::black_box;

fn form(message: &str) -> ContactForm {
    ContactForm {
        name: "Ayşe Yılmaz".to_string(),
        company: "Voith Turbo".to_string(),
        email: "ayse.yilmaz@example.com".to_string(),
        phone: "+90 216 555 12 34".to_string(),
        message: message.to_string(),
        attachment: None,
    }
}

fn bench_validate_contact(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation/contact");

    let valid = form("We need 200 turned flanges in 316L, drawing attached.");
    group.bench_function("valid", |b| {
        b.iter(|| assert!(validate_contact(black_box(&valid)).is_empty()));
    });

    let invalid = ContactForm {
        name: "   ".to_string(),
        email: "broken@".to_string(),
        ..form("short")
    };
    group.bench_function("all_errors", |b| {
        b.iter(|| assert_eq!(validate_contact(black_box(&invalid)).len(), 3));
    });

    // 最长允许消息
    let long = form(&"ş".repeat(2000));
    group.bench_function("max_length_message", |b| {
        b.iter(|| assert!(validate_contact(black_box(&long)).is_empty()));
    });

    group.finish();
}

fn bench_validate_form_with_attachment(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation/attachment");
    let max = 20 * 1024 * 1024;

    let mut with_drawing = form("Quote request for the attached STEP model, 50 pcs.");
    with_drawing.attachment = Some(Attachment {
        filename: "housing-rev3.STEP".to_string(),
        content_type: "application/step".to_string(),
        data: bytes::Bytes::from(vec![0u8; 512 * 1024]),
    });
    group.bench_function("step_file", |b| {
        b.iter(|| assert!(validate_form(black_box(&with_drawing), max).is_empty()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_validate_contact,
    bench_validate_form_with_attachment
);
criterion_main!(benches);
