const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 260.0;
const PADDING_X: f64 = 44.0;
const PADDING_Y: f64 = 34.0;
const TOP: f64 = 24.0;
const TICKS: usize = 4;

const ADMISSION_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const ADMISSIONS: [f64; 7] = [35.0, 42.0, 38.0, 55.0, 48.0, 70.0, 65.0];

const BED_SEGMENTS: [(&str, f64, &str); 4] = [
    ("ICU", 18.0, "#ff5b5c"),
    ("ER", 12.0, "#ffb547"),
    ("Gen", 45.0, "#4318ff"),
    ("Ped", 10.0, "#2d9cdb"),
];

const RISK_BARS: [(&str, f64); 5] = [
    ("Critical", 5.0),
    ("High", 12.0),
    ("Mod", 25.0),
    ("Stable", 40.0),
    ("Discharge", 15.0),
];

struct Frame {
    min: f64,
    max: f64,
}

impl Frame {
    fn around(values: &[f64]) -> Self {
        let mut min = values.iter().copied().fold(f64::INFINITY, f64::min).min(0.0);
        let mut max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max).max(0.0);
        if min == max {
            min -= 1.0;
            max += 1.0;
        }
        Self { min, max }
    }

    fn y(&self, value: f64) -> f64 {
        let scale = (HEIGHT - TOP - PADDING_Y) / (self.max - self.min);
        HEIGHT - PADDING_Y - (value - self.min) * scale
    }

    fn grid(&self) -> String {
        let mut grid = String::new();
        for tick in 0..=TICKS {
            let value = self.min + (self.max - self.min) * tick as f64 / TICKS as f64;
            let y = self.y(value);
            grid.push_str(&format!(
                r#"<line class="chart-grid" x1="{PADDING_X}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" />"#,
                WIDTH - PADDING_X
            ));
            grid.push_str(&format!(
                r#"<text class="chart-label" x="{:.2}" y="{:.2}" text-anchor="end">{}</text>"#,
                PADDING_X - 10.0,
                y + 4.0,
                axis_label(value)
            ));
        }
        grid
    }
}

pub fn admissions_line() -> String {
    let frame = Frame::around(&ADMISSIONS);
    let x_step = (WIDTH - PADDING_X * 2.0) / (ADMISSIONS.len() - 1) as f64;
    let x = |index: usize| PADDING_X + index as f64 * x_step;

    let mut path = String::new();
    for (index, value) in ADMISSIONS.iter().enumerate() {
        let command = if index == 0 { 'M' } else { 'L' };
        path.push_str(&format!("{command} {:.2} {:.2} ", x(index), frame.y(*value)));
    }
    let path = path.trim_end();

    let baseline = frame.y(0.0);
    let area = format!(
        "{path} L {:.2} {baseline:.2} L {:.2} {baseline:.2} Z",
        x(ADMISSIONS.len() - 1),
        x(0)
    );

    let mut markers = String::new();
    for (index, value) in ADMISSIONS.iter().enumerate() {
        markers.push_str(&format!(
            r#"<circle class="chart-point" cx="{:.2}" cy="{:.2}" r="4" />"#,
            x(index),
            frame.y(*value)
        ));
    }

    let mut labels = String::new();
    for (index, label) in ADMISSION_LABELS.iter().enumerate() {
        labels.push_str(&format!(
            r#"<text class="chart-label" x="{:.2}" y="{:.2}" text-anchor="middle">{label}</text>"#,
            x(index),
            HEIGHT - PADDING_Y + 18.0
        ));
    }

    format!(
        r#"<svg viewBox="0 0 {WIDTH} {HEIGHT}" role="img" aria-label="Weekly admissions">{grid}<path class="chart-area" d="{area}" /><path class="chart-line" d="{path}" />{markers}{labels}</svg>"#,
        grid = frame.grid(),
    )
}

pub fn bed_occupancy_donut() -> String {
    let total: f64 = BED_SEGMENTS.iter().map(|(_, beds, _)| *beds).sum();

    let mut segments = String::new();
    let mut offset = 25.0;
    for (_, beds, color) in BED_SEGMENTS {
        let share = beds / total * 100.0;
        segments.push_str(&format!(
            r#"<circle class="donut-segment" cx="110" cy="110" r="80" pathLength="100" stroke="{color}" stroke-dasharray="{share:.2} {:.2}" stroke-dashoffset="{offset:.2}" />"#,
            100.0 - share
        ));
        offset -= share;
    }

    let mut legend = String::new();
    for (index, (label, _, color)) in BED_SEGMENTS.iter().enumerate() {
        let x = 14.0 + index as f64 * 52.0;
        legend.push_str(&format!(
            r#"<rect x="{x:.0}" y="238" width="10" height="10" rx="2" fill="{color}" /><text class="chart-label" x="{:.0}" y="247">{label}</text>"#,
            x + 14.0
        ));
    }

    format!(r#"<svg viewBox="0 0 220 260" role="img" aria-label="Bed occupancy">{segments}{legend}</svg>"#)
}

pub fn risk_distribution_bar() -> String {
    let values: Vec<f64> = RISK_BARS.iter().map(|(_, patients)| *patients).collect();
    let frame = Frame::around(&values);
    let slot = (WIDTH - PADDING_X * 2.0) / RISK_BARS.len() as f64;
    let bar_width = slot * 0.6;
    let baseline = frame.y(0.0);

    let mut bars = String::new();
    let mut labels = String::new();
    for (index, (label, patients)) in RISK_BARS.iter().enumerate() {
        let center = PADDING_X + slot * (index as f64 + 0.5);
        let top = frame.y(*patients);
        bars.push_str(&format!(
            r#"<rect class="chart-bar" x="{:.2}" y="{top:.2}" width="{bar_width:.2}" height="{:.2}" rx="8" />"#,
            center - bar_width / 2.0,
            baseline - top
        ));
        labels.push_str(&format!(
            r#"<text class="chart-label" x="{center:.2}" y="{:.2}" text-anchor="middle">{label}</text>"#,
            HEIGHT - PADDING_Y + 18.0
        ));
    }

    format!(
        r#"<svg viewBox="0 0 {WIDTH} {HEIGHT}" role="img" aria-label="Patient risk distribution">{grid}{bars}{labels}</svg>"#,
        grid = frame.grid()
    )
}

fn axis_label(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded:.1}")
    }
}
