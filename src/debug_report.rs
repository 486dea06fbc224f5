use seqtract::{ExtractDetails, ExtractedEntity, FamilyTrace};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        fn wrap(&self, s: &str, code: &str) -> String {
            if self.enabled { format!("{code}{s}{RESET}") } else { s.to_string() }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            self.wrap(s.as_ref(), color)
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.wrap(s.as_ref(), BOLD)
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.wrap(s.as_ref(), DIM)
        }
    }
}

const SAMPLES_SHOWN: usize = 5;

pub fn print_run(input: &str, results: &[ExtractedEntity], details: &ExtractDetails, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Extracting: \"{}\"", input.trim_end()), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Families ━━━", ansi::GRAY));
    for trace in &details.families {
        print_family(trace, &palette);
    }

    println!("\n{}", palette.paint("━━━ Results ━━━", ansi::GRAY));
    if results.is_empty() {
        println!("{}", palette.dim("  No entities found"));
        if !details.all_candidates.is_empty() {
            println!(
                "  {}",
                palette.paint(
                    format!("{} merged candidate(s) were removed by post-processing", details.all_candidates.len()),
                    ansi::YELLOW
                )
            );
        }
        println!("\n{}", palette.dim("  Tip: Set SEQTRACT_LOG=seqtract=debug to trace rejected candidates"));
    } else {
        print_results(results, &palette);
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    let active: std::time::Duration = details.families.iter().map(|t| t.duration).sum();
    println!(
        "  Total: {}  │  Families: {}",
        palette.paint(format!("{:?}", details.total), ansi::GREEN),
        palette.dim(format!("{active:?}")),
    );
    println!();
}

fn print_family(trace: &FamilyTrace, palette: &ansi::Palette) {
    let label = palette.paint(format!("{:<12}", trace.family.name()), ansi::BLUE);
    if trace.skipped {
        println!("  {} {}", label, palette.dim("skipped (no trigger characters)"));
        return;
    }

    let stats = &trace.stats;
    let summary = format!(
        "{} occ  {} rejected  {} runs  {} filtered  {} unresolved",
        trace.occurrences, stats.rejected, stats.runs, stats.filtered, stats.unresolved
    );
    let emitted = if trace.emitted > 0 {
        palette.paint(format!("✓ {} entities", trace.emitted), ansi::GREEN)
    } else {
        palette.dim("✗ 0 entities")
    };
    println!("  {} {}  {}  {}", label, emitted, palette.dim(summary), palette.dim(format!("{:?}", trace.duration)));

    for (tag, count) in trace.per_pattern.iter().filter(|(_, count)| *count > 0) {
        println!("    {} {}", palette.paint(tag, ansi::CYAN), palette.dim(format!("× {count}")));
    }
    for sample in trace.samples.iter().take(SAMPLES_SHOWN) {
        println!(
            "    {} {} {}",
            palette.paint(format!("{}..{}", sample.start, sample.end), ansi::YELLOW),
            palette.paint(&sample.tag, ansi::BLUE),
            palette.dim(&sample.preview)
        );
    }
    if trace.occurrences > SAMPLES_SHOWN {
        println!("    {}", palette.dim(format!("... +{} more", trace.occurrences - SAMPLES_SHOWN)));
    }
}

fn print_results(results: &[ExtractedEntity], palette: &ansi::Palette) {
    for (idx, ent) in results.iter().enumerate() {
        println!(
            "  {} {} {} {}",
            palette.paint(format!("[{idx}]"), ansi::GRAY),
            palette.bold(palette.paint(&ent.text, ansi::GREEN)),
            palette.dim("│"),
            palette.paint(format!("span {}..{}", ent.start, ent.end()), ansi::YELLOW),
        );
        println!(
            "      {} {}  {} {}",
            palette.dim("type:"),
            palette.paint(&ent.kind, ansi::BLUE),
            palette.dim("│ data:"),
            palette.paint(&ent.data, ansi::CYAN)
        );
    }
}
