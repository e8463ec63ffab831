//! Full frame render: escape time, colour mapping and quantization.
//!
//! Run with: cargo bench --bench render_pipeline

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fracterm::{
    ColourMapParams, Complex, ErrorBuffer, FractalVariant, FrameRequest, IterationBudget,
    NativePalette, PaletteMode, QuantizeOptions, Viewport, build_palette, render_frame,
};
use std::hint::black_box;

const SIZES: [(u32, u32); 3] = [(80, 23), (120, 39), (200, 59)];

fn bench_render(c: &mut Criterion, group_name: &str, mode: PaletteMode) {
    let palette = build_palette(mode, None);
    let targets = NativePalette::blended();
    let options = QuantizeOptions {
        dither: true,
        overlay_glyphs: true,
    };

    let mut group = c.benchmark_group(group_name);
    for (cols, rows) in SIZES {
        group.throughput(Throughput::Elements(u64::from(cols) * u64::from(rows)));

        let Ok(viewport) = Viewport::new(cols, rows, Complex::new(-0.5, 0.0), 1.8) else {
            continue;
        };
        for parallel in [false, true] {
            let request = FrameRequest {
                viewport,
                variant: FractalVariant::Mandelbrot,
                budget: IterationBudget::new(200),
                colour_map: ColourMapParams::default(),
                palette: &palette,
                blend_targets: &targets,
                options,
                parallel,
            };
            let mut errors = ErrorBuffer::for_mode(mode == PaletteMode::Ramp, cols as usize, rows as usize);
            let name = if parallel { "rayon" } else { "serial" };

            group.bench_with_input(
                BenchmarkId::new(name, format!("{cols}x{rows}")),
                &request,
                |b, request| b.iter(|| black_box(render_frame(request, &mut errors))),
            );
        }
    }
    group.finish();
}

fn bench_direct(c: &mut Criterion) {
    bench_render(c, "render/direct", PaletteMode::Direct);
}

fn bench_ramp(c: &mut Criterion) {
    bench_render(c, "render/ramp", PaletteMode::Ramp);
}

criterion_group!(benches, bench_direct, bench_ramp);
criterion_main!(benches);
