use crate::style::StylePatch;

pub fn skill_bar_collapsed() -> StylePatch {
    StylePatch::new().set("width", "0")
}

pub fn skill_bar_width(raw: &str) -> Option<StylePatch> {
    let progress = raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())?;
    Some(StylePatch::new().set("width", format!("{progress}%")))
}

pub fn parse_counter_target(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: f64,
    step: f64,
    current: f64,
    decimal: bool,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: f64, duration_ms: u32, frame_ms: u32) -> Self {
        let frames = f64::from(duration_ms) / f64::from(frame_ms.max(1));
        Self {
            target,
            step: target / frames.max(1.0),
            current: 0.0,
            decimal: target.fract() != 0.0,
            finished: false,
        }
    }

    #[cfg(test)]
    fn is_decimal(&self) -> bool {
        self.decimal
    }

    /// Adds one step and returns the text to draw. The final frame shows the
    /// exact target; after it, returns `None`.
    pub fn next_frame(&mut self) -> Option<CounterFrame> {
        if self.finished {
            return None;
        }

        self.current += self.step;
        if self.current < self.target {
            let text = if self.decimal {
                format!("{:.2}", self.current)
            } else {
                format!("{}", self.current.floor())
            };
            return Some(CounterFrame { text, done: false });
        }

        self.finished = true;
        let text = if self.decimal {
            format!("{:.2}", self.target)
        } else {
            format!("{}", self.target)
        };
        Some(CounterFrame { text, done: true })
    }
}
