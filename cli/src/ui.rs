#![warn(clippy::all)]

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub fn create_progress_spinner(msg: String) -> ProgressBar {
  let style = ProgressStyle::default_spinner().template("{msg} {spinner:.cyan/blue} {elapsed:>4}");
  let bar = ProgressBar::new_spinner();
  let bar = if let Ok(style) = style {
    bar.with_style(style.tick_strings(&[r"◧", r"◩", r"⬒", r"⬔", r"◨", r"◪", r"⬓", r"⬕"]))
  } else {
    bar
  };

  bar.enable_steady_tick(Duration::from_millis(100));
  bar.set_message(msg);
  bar
}
