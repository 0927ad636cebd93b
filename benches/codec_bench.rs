//! Benchmarks for frame encoding/decoding

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sentinel_rcon::protocol::{decode_packet, encode_packet, PacketType};

fn codec_benchmarks(c: &mut Criterion) {
    let short_body = "list";
    let long_body = "a".repeat(2048);

    c.bench_function("encode_short_command", |b| {
        b.iter(|| encode_packet(black_box(7), PacketType::Command, black_box(short_body)))
    });

    c.bench_function("encode_2k_command", |b| {
        b.iter(|| encode_packet(black_box(7), PacketType::Command, black_box(&long_body)))
    });

    let short_frame = encode_packet(7, PacketType::ResponseValue, short_body);
    c.bench_function("decode_short_frame", |b| {
        b.iter(|| decode_packet(black_box(&short_frame)).unwrap())
    });

    let long_frame = encode_packet(7, PacketType::ResponseValue, &long_body);
    c.bench_function("decode_2k_frame", |b| {
        b.iter(|| decode_packet(black_box(&long_frame)).unwrap())
    });
}

criterion_group!(benches, codec_benchmarks);
criterion_main!(benches);
