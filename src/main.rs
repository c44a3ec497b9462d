#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod animators;
mod config;
mod logging;
mod navigation;
mod parallax;
mod particles;
mod reveal;
mod style;
mod tilt;
mod typing;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod effects;
#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
