//! Cost of dispatching a play request, with audio output stubbed out

use std::path::Path;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use debug_noises::audio::{AudioBackend, NoiseBank, NoiseConfig, RandomPicker, SoundCategory};
use debug_noises::BackendError;

/// Backend that accepts every file and plays nothing
struct NullBackend;

impl AudioBackend for NullBackend {
    type Handle = ();

    fn load(&mut self, _path: &Path) -> Result<(), BackendError> {
        Ok(())
    }

    fn trigger(&mut self, handle: &()) -> Result<(), BackendError> {
        black_box(handle);
        Ok(())
    }
}

fn bench_play(c: &mut Criterion) {
    let bank = NoiseBank::with_config("bench", &NoiseConfig::default(), NullBackend, RandomPicker::seeded(1))
        .expect("null backend never fails");

    c.bench_function("play_single_clip", |b| b.iter(|| bank.play(black_box(SoundCategory::Start))));
    c.bench_function("play_random_step", |b| b.iter(|| bank.play(black_box(SoundCategory::Step))));
}

criterion_group!(benches, bench_play);
criterion_main!(benches);
