// Example: a terminal-style host driving the engine from its own frame loop.
//
// Run with `--features tracing` and `RUST_LOG=trace` to see each pass.
use windower::{WindowError, WindowOptions};
use windower_adapter::{FrameQueue, GeometryProvider, HostContainer, WindowEngine};

/// One printed line per materialized row, in screen order.
#[derive(Default)]
struct Screen {
    scroll_offset: u64,
    rows: u32,
    lines: Vec<(usize, String)>,
}

impl GeometryProvider for Screen {
    fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    fn viewport_size(&self) -> u32 {
        self.rows
    }
}

impl HostContainer for Screen {
    type Handle = usize;

    fn insert_before(&mut self, element: &usize, anchor: Option<&usize>) {
        let line = (*element, format!("{:>6} | item {}", element, element + 1));
        match anchor.and_then(|a| self.lines.iter().position(|(i, _)| i == a)) {
            Some(pos) => self.lines.insert(pos, line),
            None => self.lines.push(line),
        }
    }

    fn remove(&mut self, element: &usize) {
        self.lines.retain(|(i, _)| i != element);
    }
}

fn main() -> Result<(), WindowError> {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // One terminal row per item.
    let screen = Screen {
        rows: 24,
        ..Screen::default()
    };
    let data: Vec<u64> = (0..100_000).collect();
    let mut engine = WindowEngine::new(
        WindowOptions::new(data.len(), 1).with_overscan(2),
        screen,
        FrameQueue::new(),
        data,
        |index: usize, _value: &u64| index,
    )?;

    let first = engine.mount()?;
    println!("mounted: range={:?} added={}", first.range, first.added);

    // A fast wheel burst: many notifications, one pass per frame.
    for frame in 0..3u64 {
        for step in 0..20u64 {
            engine.host_mut().scroll_offset = frame * 5_000 + step * 40;
            engine.on_scroll_or_resize();
        }
        for token in engine.scheduler_mut().take_frame() {
            if let Some(report) = engine.on_frame(token)? {
                println!(
                    "frame {frame}: offset={} range={:?} evicted={} added={}",
                    report.geometry.scroll_offset, report.range, report.evicted, report.added
                );
            }
        }
    }

    let lines = &engine.host().lines;
    println!("top line: {:?}", lines.first().map(|(_, l)| l));
    println!("bottom line: {:?}", lines.last().map(|(_, l)| l));

    engine.destroy();
    println!("after destroy: {} lines", engine.host().lines.len());
    Ok(())
}
