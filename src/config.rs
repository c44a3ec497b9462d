use crate::logging::LogLevel;
use serde::Deserialize;

pub const CONFIG_ELEMENT_ID: &str = "effects-config";

const DEFAULT_WORDS: [&str; 5] = ["برمجيات", "Full-Stack", "ذكاء اصطناعي", "موبايل", "ويب"];
const DEFAULT_TYPE_DELAY_MS: u32 = 100;
const DEFAULT_DELETE_DELAY_MS: u32 = 50;
const DEFAULT_HOLD_DELAY_MS: u32 = 2_000;
const DEFAULT_NEXT_WORD_DELAY_MS: u32 = 500;
const DEFAULT_TILT_SENSITIVITY: f64 = 20.0;
const DEFAULT_CODE_WINDOW_SENSITIVITY: f64 = 15.0;
const DEFAULT_NAV_LOOKAHEAD: f64 = 200.0;
const DEFAULT_NAV_TINT_THRESHOLD: f64 = 50.0;
const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
const DEFAULT_REVEAL_BOTTOM_MARGIN_PX: u32 = 50;
const DEFAULT_CARD_STAGGER_MS: u32 = 100;
const DEFAULT_SKILL_BAR_DELAY_MS: u32 = 300;
const DEFAULT_COUNTER_DURATION_MS: u32 = 2_000;
const DEFAULT_COUNTER_FRAME_MS: u32 = 16;
const DEFAULT_PARTICLE_COUNT: usize = 50;
const DEFAULT_PARALLAX_STRENGTH: f64 = 20.0;
const DEFAULT_HERO_SCROLL_FACTOR: f64 = 0.5;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const DELAY_MS_BOUNDS: (u32, u32) = (1, 60_000);
const SENSITIVITY_BOUNDS: (f64, f64) = (1.0, 200.0);
const NAV_OFFSET_BOUNDS: (f64, f64) = (0.0, 2_000.0);
const REVEAL_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 1.0);
const REVEAL_BOTTOM_MARGIN_PX_BOUNDS: (u32, u32) = (0, 500);
const CARD_STAGGER_MS_BOUNDS: (u32, u32) = (0, 2_000);
const COUNTER_FRAME_MS_BOUNDS: (u32, u32) = (1, 1_000);
const PARTICLE_COUNT_BOUNDS: (usize, usize) = (0, 500);
const PARALLAX_STRENGTH_BOUNDS: (f64, f64) = (0.0, 200.0);
const HERO_SCROLL_FACTOR_BOUNDS: (f64, f64) = (0.0, 2.0);

#[derive(Clone, Debug, PartialEq)]
pub struct EffectsConfig {
    pub words: Vec<String>,
    pub type_delay_ms: u32,
    pub delete_delay_ms: u32,
    pub hold_delay_ms: u32,
    pub next_word_delay_ms: u32,
    pub tilt_sensitivity: f64,
    pub code_window_sensitivity: f64,
    pub nav_lookahead: f64,
    pub nav_tint_threshold: f64,
    pub reveal_threshold: f64,
    pub reveal_bottom_margin_px: u32,
    pub card_stagger_ms: u32,
    pub skill_bar_delay_ms: u32,
    pub counter_duration_ms: u32,
    pub counter_frame_ms: u32,
    pub particle_count: usize,
    pub parallax_strength: f64,
    pub hero_scroll_factor: f64,
    pub log_level: LogLevel,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|word| word.to_string()).collect(),
            type_delay_ms: DEFAULT_TYPE_DELAY_MS,
            delete_delay_ms: DEFAULT_DELETE_DELAY_MS,
            hold_delay_ms: DEFAULT_HOLD_DELAY_MS,
            next_word_delay_ms: DEFAULT_NEXT_WORD_DELAY_MS,
            tilt_sensitivity: DEFAULT_TILT_SENSITIVITY,
            code_window_sensitivity: DEFAULT_CODE_WINDOW_SENSITIVITY,
            nav_lookahead: DEFAULT_NAV_LOOKAHEAD,
            nav_tint_threshold: DEFAULT_NAV_TINT_THRESHOLD,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_bottom_margin_px: DEFAULT_REVEAL_BOTTOM_MARGIN_PX,
            card_stagger_ms: DEFAULT_CARD_STAGGER_MS,
            skill_bar_delay_ms: DEFAULT_SKILL_BAR_DELAY_MS,
            counter_duration_ms: DEFAULT_COUNTER_DURATION_MS,
            counter_frame_ms: DEFAULT_COUNTER_FRAME_MS,
            particle_count: DEFAULT_PARTICLE_COUNT,
            parallax_strength: DEFAULT_PARALLAX_STRENGTH,
            hero_scroll_factor: DEFAULT_HERO_SCROLL_FACTOR,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawEffectsConfig {
    words: Option<Vec<String>>,
    type_delay_ms: Option<u32>,
    delete_delay_ms: Option<u32>,
    hold_delay_ms: Option<u32>,
    next_word_delay_ms: Option<u32>,
    tilt_sensitivity: Option<f64>,
    code_window_sensitivity: Option<f64>,
    nav_lookahead: Option<f64>,
    nav_tint_threshold: Option<f64>,
    reveal_threshold: Option<f64>,
    reveal_bottom_margin_px: Option<u32>,
    card_stagger_ms: Option<u32>,
    skill_bar_delay_ms: Option<u32>,
    counter_duration_ms: Option<u32>,
    counter_frame_ms: Option<u32>,
    particle_count: Option<usize>,
    parallax_strength: Option<f64>,
    hero_scroll_factor: Option<f64>,
    log_level: Option<String>,
}

fn with_bounds<T: PartialOrd + Copy>(value: Option<T>, default: T, bounds: (T, T)) -> T {
    value
        .filter(|value| *value >= bounds.0 && *value <= bounds.1)
        .unwrap_or(default)
}

impl EffectsConfig {
    /// Parses the JSON config block. Missing or out-of-range fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let raw: RawEffectsConfig = serde_json::from_str(raw)?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawEffectsConfig) -> Self {
        let defaults = Self::default();

        let words = raw
            .words
            .map(|words| {
                words
                    .into_iter()
                    .filter(|word| !word.trim().is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|words| !words.is_empty())
            .unwrap_or(defaults.words);

        let counter_frame_ms = with_bounds(
            raw.counter_frame_ms,
            DEFAULT_COUNTER_FRAME_MS,
            COUNTER_FRAME_MS_BOUNDS,
        );
        // The duration must cover at least one frame.
        let counter_duration_ms = raw
            .counter_duration_ms
            .filter(|value| *value >= counter_frame_ms && *value <= DELAY_MS_BOUNDS.1)
            .unwrap_or(DEFAULT_COUNTER_DURATION_MS.max(counter_frame_ms));

        Self {
            words,
            type_delay_ms: with_bounds(raw.type_delay_ms, DEFAULT_TYPE_DELAY_MS, DELAY_MS_BOUNDS),
            delete_delay_ms: with_bounds(
                raw.delete_delay_ms,
                DEFAULT_DELETE_DELAY_MS,
                DELAY_MS_BOUNDS,
            ),
            hold_delay_ms: with_bounds(raw.hold_delay_ms, DEFAULT_HOLD_DELAY_MS, DELAY_MS_BOUNDS),
            next_word_delay_ms: with_bounds(
                raw.next_word_delay_ms,
                DEFAULT_NEXT_WORD_DELAY_MS,
                DELAY_MS_BOUNDS,
            ),
            tilt_sensitivity: with_bounds(
                raw.tilt_sensitivity,
                DEFAULT_TILT_SENSITIVITY,
                SENSITIVITY_BOUNDS,
            ),
            code_window_sensitivity: with_bounds(
                raw.code_window_sensitivity,
                DEFAULT_CODE_WINDOW_SENSITIVITY,
                SENSITIVITY_BOUNDS,
            ),
            nav_lookahead: with_bounds(raw.nav_lookahead, DEFAULT_NAV_LOOKAHEAD, NAV_OFFSET_BOUNDS),
            nav_tint_threshold: with_bounds(
                raw.nav_tint_threshold,
                DEFAULT_NAV_TINT_THRESHOLD,
                NAV_OFFSET_BOUNDS,
            ),
            reveal_threshold: with_bounds(
                raw.reveal_threshold,
                DEFAULT_REVEAL_THRESHOLD,
                REVEAL_THRESHOLD_BOUNDS,
            ),
            reveal_bottom_margin_px: with_bounds(
                raw.reveal_bottom_margin_px,
                DEFAULT_REVEAL_BOTTOM_MARGIN_PX,
                REVEAL_BOTTOM_MARGIN_PX_BOUNDS,
            ),
            card_stagger_ms: with_bounds(
                raw.card_stagger_ms,
                DEFAULT_CARD_STAGGER_MS,
                CARD_STAGGER_MS_BOUNDS,
            ),
            skill_bar_delay_ms: with_bounds(
                raw.skill_bar_delay_ms,
                DEFAULT_SKILL_BAR_DELAY_MS,
                DELAY_MS_BOUNDS,
            ),
            counter_duration_ms,
            counter_frame_ms,
            particle_count: with_bounds(
                raw.particle_count,
                DEFAULT_PARTICLE_COUNT,
                PARTICLE_COUNT_BOUNDS,
            ),
            parallax_strength: with_bounds(
                raw.parallax_strength,
                DEFAULT_PARALLAX_STRENGTH,
                PARALLAX_STRENGTH_BOUNDS,
            ),
            hero_scroll_factor: with_bounds(
                raw.hero_scroll_factor,
                DEFAULT_HERO_SCROLL_FACTOR,
                HERO_SCROLL_FACTOR_BOUNDS,
            ),
            log_level: raw
                .log_level
                .as_deref()
                .and_then(LogLevel::parse)
                .unwrap_or(DEFAULT_LOG_LEVEL),
        }
    }

    pub fn reveal_root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.reveal_bottom_margin_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = EffectsConfig::from_json("{}").expect("valid JSON");

        assert_eq!(config, EffectsConfig::default());
        assert_eq!(config.particle_count, 50);
        assert_eq!(config.words.len(), 5);
    }

    #[test]
    fn in_range_overrides_are_applied() {
        let config = EffectsConfig::from_json(
            r#"{"words": ["a", "bb"], "typeDelayMs": 80, "particleCount": 10, "logLevel": "debug"}"#,
        )
        .expect("valid JSON");

        assert_eq!(config.words, vec!["a".to_string(), "bb".to_string()]);
        assert_eq!(config.type_delay_ms, 80);
        assert_eq!(config.particle_count, 10);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn out_of_range_values_fall_back_to_defaults() {
        let config = EffectsConfig::from_json(
            r#"{"tiltSensitivity": 0, "revealThreshold": 1.5, "particleCount": 100000, "logLevel": "loud"}"#,
        )
        .expect("valid JSON");

        assert_eq!(config.tilt_sensitivity, DEFAULT_TILT_SENSITIVITY);
        assert_eq!(config.reveal_threshold, DEFAULT_REVEAL_THRESHOLD);
        assert_eq!(config.particle_count, DEFAULT_PARTICLE_COUNT);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn blank_word_lists_keep_the_default_words() {
        let config = EffectsConfig::from_json(r#"{"words": ["  ", ""]}"#).expect("valid JSON");

        assert_eq!(config.words, EffectsConfig::default().words);
    }

    #[test]
    fn words_keep_their_spacing_and_blank_entries_are_dropped() {
        let config = EffectsConfig::from_json(r#"{"words": [" web ", "   ", "mobile"]}"#)
            .expect("valid JSON");

        assert_eq!(config.words, vec![" web ".to_string(), "mobile".to_string()]);
    }

    #[test]
    fn counter_duration_shorter_than_a_frame_is_rejected() {
        let config = EffectsConfig::from_json(r#"{"counterFrameMs": 40, "counterDurationMs": 10}"#)
            .expect("valid JSON");

        assert_eq!(config.counter_frame_ms, 40);
        assert_eq!(config.counter_duration_ms, DEFAULT_COUNTER_DURATION_MS);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(EffectsConfig::from_json("{ words: ").is_err());
    }

    #[test]
    fn root_margin_only_shrinks_the_bottom_edge() {
        assert_eq!(EffectsConfig::default().reveal_root_margin(), "0px 0px -50px 0px");
    }
}
