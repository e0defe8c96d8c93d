//! Pointer trace replay against a headless document

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use anyhow::{Context, Result};
use glide_core::{Bounds, CarouselConfig, ElementStyle};
use glide_layout::{Document, ElementSpec, MouseScrollBinder};

/// One step of a pointer trace
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// Pointer moved to this client X
    Move(f64),
    /// Pointer left the window
    Leave,
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("leave") {
            return Ok(Step::Leave);
        }
        s.parse::<f64>()
            .map(Step::Move)
            .map_err(|_| format!("expected a pointer X or `leave`, got `{}`", s))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Move(x) => write!(f, "move {}", x),
            Step::Leave => f.write_str("leave"),
        }
    }
}

/// Layout of the simulated page
#[derive(Clone, Copy, Debug)]
pub struct Scene {
    pub window_left: f64,
    pub window_width: f64,
    pub content_width: f64,
}

/// Replay `steps` and return the strip style after each one
pub fn run(scene: Scene, config: &CarouselConfig, steps: &[Step]) -> Result<Vec<ElementStyle>> {
    let doc = Rc::new(Document::new());
    let window = doc.insert(
        ElementSpec::new(config.window_selector.as_str()).bounds(Bounds::new(
            scene.window_left,
            0.0,
            scene.window_width,
            0.0,
        )),
    );
    let strip = doc.insert(
        ElementSpec::new(config.content_selector.as_str())
            .bounds(Bounds::new(
                scene.window_left,
                0.0,
                scene.window_width,
                0.0,
            ))
            .scroll_width(scene.content_width),
    );

    let handle = MouseScrollBinder::attach(doc.clone(), config)
        .context("carousel selectors did not resolve")?;

    let styles = steps
        .iter()
        .map(|step| {
            match *step {
                Step::Move(x) => doc.pointer_move(window, x),
                Step::Leave => doc.pointer_leave(window),
            };
            tracing::debug!(%step, writes = doc.style_writes(), "replayed");
            doc.style(strip)
        })
        .collect();

    handle.dispose();
    Ok(styles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_core::Transition;

    const SCENE: Scene = Scene {
        window_left: 0.0,
        window_width: 400.0,
        content_width: 1000.0,
    };

    #[test]
    fn test_parse_steps() {
        assert_eq!("leave".parse::<Step>(), Ok(Step::Leave));
        assert_eq!("LEAVE".parse::<Step>(), Ok(Step::Leave));
        assert_eq!("-12.5".parse::<Step>(), Ok(Step::Move(-12.5)));
        assert!("left".parse::<Step>().is_err());
    }

    #[test]
    fn test_replay() {
        let steps = [Step::Move(400.0), Step::Leave, Step::Move(200.0)];
        let styles = run(SCENE, &CarouselConfig::default(), &steps).unwrap();

        assert_eq!(styles.len(), 3);
        assert_eq!(styles[0].translate(), Some(-600.0));
        assert_eq!(styles[1].transition, Some(Transition::None));
        assert_eq!(styles[1].translate(), Some(-600.0));
        assert_eq!(styles[2].translate(), Some(0.0));
        assert_eq!(
            styles[2].transition,
            Some(Transition::linear_transform_ms(100))
        );
    }

    #[test]
    fn test_leave_before_any_move() {
        let styles = run(SCENE, &CarouselConfig::default(), &[Step::Leave]).unwrap();
        assert_eq!(styles[0].to_css(), "transition: none");
    }

    #[test]
    fn test_custom_selectors() {
        let config = CarouselConfig::with_selectors("#viewport", "#track");
        let styles = run(SCENE, &config, &[Step::Move(0.0)]).unwrap();
        assert_eq!(styles[0].translate(), Some(0.0));
    }
}
