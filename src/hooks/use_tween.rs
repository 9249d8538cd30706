use gloo::render::{AnimationFrame, request_animation_frame};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

use crate::models::tween::{NumberFormat, Tween, frame_delta};

/// What an animated number should currently show.
#[derive(Clone, PartialEq, Debug)]
pub enum TweenDisplay {
    Value(String),
    /// The last requested target was rejected
    Invalid(String),
}

impl TweenDisplay {
    /// Returns the live text, or `placeholder` if the target was rejected
    pub fn text_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self {
            Self::Value(text) => text,
            Self::Invalid(_) => placeholder,
        }
    }
}

struct TweenDriver {
    tween: Tween,
    frame: Option<AnimationFrame>,
    last_timestamp: Option<f64>,
}

/// Animates toward `value` with a spring, one step per animation frame.
///
/// A new `value` re-aims the running animation from wherever it currently is.
/// Frames stop being requested once the spring settles and resume on the
/// next change.
#[hook]
pub fn use_tween(value: f64, format: NumberFormat) -> TweenDisplay {
    let driver = {
        let format = format.clone();
        use_mut_ref(move || TweenDriver {
            tween: Tween::new(format),
            frame: None,
            last_timestamp: None,
        })
    };
    let text = use_state(|| driver.borrow().tween.display());
    let error = use_state(|| None::<String>);

    // Effect: Retarget on every new value
    {
        let driver = driver.clone();
        let text = text.clone();
        let error = error.clone();

        use_effect_with((value, format), move |(value, format)| {
            let wake = {
                let mut d = driver.borrow_mut();
                d.tween.set_format(format.clone());
                match d.tween.observe(*value) {
                    Ok(()) => {
                        error.set(None);
                        text.set(d.tween.display());
                        d.frame.is_none() && !d.tween.is_settled()
                    }
                    Err(e) => {
                        gloo::console::warn!(format!("Animated number ignored target: {e}"));
                        error.set(Some(e.to_string()));
                        false
                    }
                }
            };

            if wake {
                schedule_frame(&driver, text.setter());
            }

            || ()
        });
    }

    // Effect: Stop stepping on unmount
    {
        let driver = driver.clone();
        use_effect_with((), move |_| {
            move || {
                let mut d = driver.borrow_mut();
                d.frame = None;
                d.last_timestamp = None;
            }
        });
    }

    match &*error {
        Some(message) => TweenDisplay::Invalid(message.clone()),
        None => TweenDisplay::Value((*text).clone()),
    }
}

fn schedule_frame(driver: &Rc<RefCell<TweenDriver>>, text: UseStateSetter<String>) {
    let next = Rc::clone(driver);
    let handle = request_animation_frame(move |timestamp| {
        let animating = {
            let mut d = next.borrow_mut();
            let dt = frame_delta(d.last_timestamp, timestamp);
            d.last_timestamp = Some(timestamp);

            // A zero dt (clock went backwards) steps nothing but keeps going
            d.tween.step(dt);
            let animating = !d.tween.is_settled();
            text.set(d.tween.display());
            if !animating {
                d.frame = None;
                d.last_timestamp = None;
            }
            animating
        };

        if animating {
            schedule_frame(&next, text);
        }
    });

    driver.borrow_mut().frame = Some(handle);
}
