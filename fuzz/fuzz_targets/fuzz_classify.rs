#![no_main]

use bezier_function_editor::CubicBezier;
use glam::Vec2;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 32 {
        return;
    }

    let mut values = [0.0f32; 8];
    for (value, chunk) in values.iter_mut().zip(data.chunks_exact(4)) {
        *value = f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    let curve = CubicBezier::new([
        Vec2::new(values[0], values[1]),
        Vec2::new(values[2], values[3]),
        Vec2::new(values[4], values[5]),
        Vec2::new(values[6], values[7]),
    ]);

    // Klassifikation und Abtastung dürfen bei beliebigen Floats (inkl. NaN/Inf) nicht paniken.
    let _ = curve.classify_monotonic();
    let segments = data.get(32).copied().unwrap_or(0) as usize;
    let _ = curve.sample_segments(segments);
});
