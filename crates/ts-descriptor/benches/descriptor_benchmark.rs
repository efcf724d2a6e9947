use std::hint::black_box;
use std::io;

use bytes::Bytes;
use criterion::{Criterion, criterion_group, criterion_main};
use ts_descriptor::{ParseOptions, parse_descriptors, parse_descriptors_with_options, read_descriptor_loop};

fn benchmark_descriptor_loops(c: &mut Criterion) {
    let mut group = c.benchmark_group("Descriptor Loop Performance");

    let pmt_es_data = Bytes::from(create_pmt_es_info());
    let sdt_data = Bytes::from(create_sdt_service_loop());
    let unknown_heavy_data = Bytes::from(create_unknown_heavy_loop());
    let prefixed_data = Bytes::from(create_prefixed_loop());

    group.bench_function("PMT ES info", |b| {
        b.iter(|| {
            parse_descriptors(black_box(pmt_es_data.clone())).unwrap();
        })
    });

    group.bench_function("SDT service loop", |b| {
        b.iter(|| {
            parse_descriptors(black_box(sdt_data.clone())).unwrap();
        })
    });

    group.bench_function("Unknown tags", |b| {
        b.iter(|| {
            parse_descriptors(black_box(unknown_heavy_data.clone())).unwrap();
        })
    });

    let strict = ParseOptions::strict();
    group.bench_function("PMT ES info (strict)", |b| {
        b.iter(|| {
            parse_descriptors_with_options(black_box(pmt_es_data.clone()), &strict).unwrap();
        })
    });

    group.bench_function("Length prefixed loop", |b| {
        b.iter(|| {
            let mut reader = io::Cursor::new(black_box(prefixed_data.clone()));
            read_descriptor_loop(&mut reader).unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_descriptor_loops);
criterion_main!(benches);

fn create_pmt_es_info() -> Vec<u8> {
    let mut data = Vec::new();

    // AC-3 audio with component type and bsid
    data.extend_from_slice(&[0x81, 0x03, 0b1100_0000, 0x42, 0x08]);
    // Audio language
    data.extend_from_slice(&[0x0A, 0x04]);
    data.extend_from_slice(b"eng\x00");
    data.extend_from_slice(&[0x52, 0x01, 0x01]); // Stream identifier
    data.extend_from_slice(&[0x0E, 0x03, 0xC0, 0x7A, 0x12]); // Maximum bitrate

    // Subtitles in four languages
    data.extend_from_slice(&[0x59, 0x20]);
    for lang in [b"eng", b"fra", b"deu", b"spa"] {
        data.extend_from_slice(lang);
        data.extend_from_slice(&[0x10, 0x00, 0x01, 0x00, 0x01]);
    }

    // Teletext pages
    data.extend_from_slice(&[0x56, 0x0F]);
    data.extend_from_slice(b"eng\x09\x00");
    data.extend_from_slice(b"eng\x11\x88");
    data.extend_from_slice(b"fra\x29\x01");

    data
}

fn create_sdt_service_loop() -> Vec<u8> {
    let mut data = Vec::new();

    for idx in 0..16u8 {
        let provider = b"Northern Broadcasting";
        let name = format!("\x15Channel {idx:02}");
        let length = 3 + provider.len() + name.len();

        data.push(0x48); // Service
        data.push(length as u8);
        data.push(0x19); // HD service type
        data.push(provider.len() as u8);
        data.extend_from_slice(provider);
        data.push(name.len() as u8);
        data.extend_from_slice(name.as_bytes());
    }

    data
}

fn create_unknown_heavy_loop() -> Vec<u8> {
    let mut data = Vec::new();

    for tag in 0x80..0xC0u8 {
        if tag == 0x81 {
            continue;
        }
        data.push(tag);
        data.push(0x08);
        data.extend_from_slice(&[tag; 8]);
    }

    data
}

fn create_prefixed_loop() -> Vec<u8> {
    let body = create_pmt_es_info();
    let mut data = vec![0xF0 | (body.len() >> 8) as u8, body.len() as u8];
    data.extend_from_slice(&body);
    data
}
