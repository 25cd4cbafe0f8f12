//! Convenience API on top of gesture and vision.
//!
//! The facade accepts a target in any form (explicit position, element,
//! image identifier, text), resolves it to a concrete work-area coordinate,
//! polling the vision provider when the target is symbolic, and forwards
//! the result to the gesture provider. Nothing persists across calls; each
//! resolve-and-dispatch is one synchronous unit of work.

mod params;

use std::sync::Arc;
use std::time::Duration;

use robotui_core::BoundingBox;
use robotui_core::Element;
use robotui_core::GestureTarget;
use robotui_core::LocateResult;
use robotui_core::Position;
use robotui_core::interpolate;
use robotui_core::project_along_angle;

pub use params::Direction;
pub use params::DragParams;
pub use params::FlickParams;
pub use params::RotateParams;
pub use params::SwipeParams;
pub use params::TapParams;

use crate::Result;
use crate::config::InteractionConfig;
use crate::error::InteractionError;
use crate::locator;
use crate::ports::GestureProvider;
use crate::ports::OptionBag;
use crate::ports::VisionProvider;

pub struct UserInteraction<V: VisionProvider, G: GestureProvider> {
    vision: Arc<V>,
    gesture: Arc<G>,
    config: InteractionConfig,
}

impl<V: VisionProvider, G: GestureProvider> UserInteraction<V, G> {
    /// The full normalized work area.
    pub const WORK_AREA: BoundingBox = BoundingBox::UNIT;

    pub fn new(vision: Arc<V>, gesture: Arc<G>) -> Self {
        Self::with_config(vision, gesture, InteractionConfig::default())
    }

    pub fn with_config(vision: Arc<V>, gesture: Arc<G>, config: InteractionConfig) -> Self {
        Self {
            vision,
            gesture,
            config,
        }
    }

    pub fn vision(&self) -> &V {
        &self.vision
    }

    pub fn gesture(&self) -> &G {
        &self.gesture
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // target resolution
    // ------------------------------------------------------------------

    fn effective_timeout(&self, locate_timeout: Option<Duration>) -> Duration {
        locate_timeout.unwrap_or(self.config.locate_timeout)
    }

    /// Resolves any target form to a concrete position. Symbolic targets go
    /// through the locate engine; an empty result becomes the matching
    /// not-recognized error carrying the original identifier.
    fn resolve(
        &self,
        target: &GestureTarget,
        rel: Position,
        locate_timeout: Option<Duration>,
    ) -> Result<Position> {
        match target {
            GestureTarget::Position(pos) => Ok(*pos),
            GestureTarget::Element(element) => Ok(element.position_at(rel)),
            GestureTarget::Image(image_id) => {
                let found = self.locate_image(image_id, locate_timeout, false, &OptionBag::new())?;
                match found.first() {
                    Some(element) => Ok(element.position_at(rel)),
                    None => Err(InteractionError::ImageNotRecognized(image_id.clone())),
                }
            }
            GestureTarget::Text(text) => {
                let found = self.locate_text(text, locate_timeout, &OptionBag::new())?;
                match found.first() {
                    Some(element) => Ok(element.position_at(rel)),
                    None => Err(InteractionError::TextNotRecognized(text.clone())),
                }
            }
        }
    }

    fn project(&self, begin: Position, direction: Direction) -> Position {
        project_along_angle(
            self.config.work_area,
            begin,
            direction.angle,
            direction.distance,
        )
    }

    /// End position for a directional gesture: a direction pre-empts any
    /// end target; with neither, the end lands at `end_rel` within the
    /// work area.
    fn resolve_end(
        &self,
        begin: Position,
        end: Option<&GestureTarget>,
        end_rel: Position,
        direction: Option<Direction>,
        locate_timeout: Option<Duration>,
    ) -> Result<Position> {
        match (direction, end) {
            (Some(direction), _) => Ok(self.project(begin, direction)),
            (None, Some(target)) => self.resolve(target, end_rel, locate_timeout),
            (None, None) => Ok(interpolate(self.config.work_area, end_rel)),
        }
    }

    // ------------------------------------------------------------------
    // tap (and hold) gestures
    // ------------------------------------------------------------------

    pub fn tap_at(&self, pos: Position, duration: Duration, options: &OptionBag) -> Result<()> {
        self.gesture.tap(pos, duration, options)?;
        Ok(())
    }

    pub fn tap_element(&self, element: &Element, params: &TapParams) -> Result<()> {
        self.tap_at(
            element.position_at(params.rel),
            params.duration,
            &params.options,
        )
    }

    #[tracing::instrument(skip(self, params), fields(image = %image_id))]
    pub fn tap_image(&self, image_id: &str, params: &TapParams) -> Result<()> {
        let pos = self.resolve(
            &GestureTarget::image(image_id),
            params.rel,
            params.locate_timeout,
        )?;
        self.tap_at(pos, params.duration, &params.options)
    }

    #[tracing::instrument(skip(self, params), fields(text = %text))]
    pub fn tap_text(&self, text: &str, params: &TapParams) -> Result<()> {
        let pos = self.resolve(&GestureTarget::text(text), params.rel, params.locate_timeout)?;
        self.tap_at(pos, params.duration, &params.options)
    }

    // ------------------------------------------------------------------
    // drag gestures (sharp begin, straight move, sharp end)
    // ------------------------------------------------------------------

    pub fn drag_between(
        &self,
        begin: Position,
        end: Position,
        begin_duration: Duration,
        end_duration: Duration,
        options: &OptionBag,
    ) -> Result<()> {
        self.gesture
            .drag(begin, end, begin_duration, end_duration, options)?;
        Ok(())
    }

    pub fn drag_element(&self, begin: &Element, end: &Element, params: &DragParams) -> Result<()> {
        let begin_pos = begin.position_at(params.begin_rel);
        let end_pos = match params.direction {
            Some(direction) => self.project(begin_pos, direction),
            None => end.position_at(params.end_rel),
        };
        self.drag_between(
            begin_pos,
            end_pos,
            params.begin_duration,
            params.end_duration,
            &params.options,
        )
    }

    #[tracing::instrument(skip(self, params), fields(image = %begin_image))]
    pub fn drag_image(
        &self,
        begin_image: &str,
        end_image: Option<&str>,
        params: &DragParams,
    ) -> Result<()> {
        let begin_pos = self.resolve(
            &GestureTarget::image(begin_image),
            params.begin_rel,
            params.locate_timeout,
        )?;
        let end_pos = self.resolve_end(
            begin_pos,
            end_image.map(GestureTarget::image).as_ref(),
            params.end_rel,
            params.direction,
            params.locate_timeout,
        )?;
        self.drag_between(
            begin_pos,
            end_pos,
            params.begin_duration,
            params.end_duration,
            &params.options,
        )
    }

    #[tracing::instrument(skip(self, params), fields(text = %begin_text))]
    pub fn drag_text(
        &self,
        begin_text: &str,
        end_text: Option<&str>,
        params: &DragParams,
    ) -> Result<()> {
        let begin_pos = self.resolve(
            &GestureTarget::text(begin_text),
            params.begin_rel,
            params.locate_timeout,
        )?;
        let end_pos = self.resolve_end(
            begin_pos,
            end_text.map(GestureTarget::text).as_ref(),
            params.end_rel,
            params.direction,
            params.locate_timeout,
        )?;
        self.drag_between(
            begin_pos,
            end_pos,
            params.begin_duration,
            params.end_duration,
            &params.options,
        )
    }

    // ------------------------------------------------------------------
    // swipe gestures (smooth begin, straight move, smooth end)
    // ------------------------------------------------------------------

    pub fn swipe_between(&self, begin: Position, end: Position, options: &OptionBag) -> Result<()> {
        self.gesture.swipe(begin, end, options)?;
        Ok(())
    }

    pub fn swipe_element(
        &self,
        begin: &Element,
        end: &Element,
        params: &SwipeParams,
    ) -> Result<()> {
        let begin_pos = begin.position_at(params.begin_rel);
        let end_pos = match params.direction {
            Some(direction) => self.project(begin_pos, direction),
            None => end.position_at(params.end_rel),
        };
        self.swipe_between(begin_pos, end_pos, &params.options)
    }

    #[tracing::instrument(skip(self, params), fields(image = %begin_image))]
    pub fn swipe_image(
        &self,
        begin_image: &str,
        end_image: Option<&str>,
        params: &SwipeParams,
    ) -> Result<()> {
        let begin_pos = self.resolve(
            &GestureTarget::image(begin_image),
            params.begin_rel,
            params.locate_timeout,
        )?;
        let end_pos = self.resolve_end(
            begin_pos,
            end_image.map(GestureTarget::image).as_ref(),
            params.end_rel,
            params.direction,
            params.locate_timeout,
        )?;
        self.swipe_between(begin_pos, end_pos, &params.options)
    }

    #[tracing::instrument(skip(self, params), fields(text = %begin_text))]
    pub fn swipe_text(
        &self,
        begin_text: &str,
        end_text: Option<&str>,
        params: &SwipeParams,
    ) -> Result<()> {
        let begin_pos = self.resolve(
            &GestureTarget::text(begin_text),
            params.begin_rel,
            params.locate_timeout,
        )?;
        let end_pos = self.resolve_end(
            begin_pos,
            end_text.map(GestureTarget::text).as_ref(),
            params.end_rel,
            params.direction,
            params.locate_timeout,
        )?;
        self.swipe_between(begin_pos, end_pos, &params.options)
    }

    // ------------------------------------------------------------------
    // flick gestures (sharp begin, straight move, smooth end)
    // ------------------------------------------------------------------

    pub fn flick_between(&self, begin: Position, end: Position, options: &OptionBag) -> Result<()> {
        self.gesture.flick(begin, end, options)?;
        Ok(())
    }

    pub fn flick_element(
        &self,
        begin: &Element,
        end: &Element,
        params: &FlickParams,
    ) -> Result<()> {
        let begin_pos = begin.position_at(params.begin_rel);
        let end_pos = match params.direction {
            Some(direction) => self.project(begin_pos, direction),
            None => end.position_at(params.end_rel),
        };
        self.flick_between(begin_pos, end_pos, &params.options)
    }

    #[tracing::instrument(skip(self, params), fields(image = %begin_image))]
    pub fn flick_image(
        &self,
        begin_image: &str,
        end_image: Option<&str>,
        params: &FlickParams,
    ) -> Result<()> {
        let begin_pos = self.resolve(
            &GestureTarget::image(begin_image),
            params.begin_rel,
            params.locate_timeout,
        )?;
        let end_pos = self.resolve_end(
            begin_pos,
            end_image.map(GestureTarget::image).as_ref(),
            params.end_rel,
            params.direction,
            params.locate_timeout,
        )?;
        self.flick_between(begin_pos, end_pos, &params.options)
    }

    #[tracing::instrument(skip(self, params), fields(text = %begin_text))]
    pub fn flick_text(
        &self,
        begin_text: &str,
        end_text: Option<&str>,
        params: &FlickParams,
    ) -> Result<()> {
        let begin_pos = self.resolve(
            &GestureTarget::text(begin_text),
            params.begin_rel,
            params.locate_timeout,
        )?;
        let end_pos = self.resolve_end(
            begin_pos,
            end_text.map(GestureTarget::text).as_ref(),
            params.end_rel,
            params.direction,
            params.locate_timeout,
        )?;
        self.flick_between(begin_pos, end_pos, &params.options)
    }

    // ------------------------------------------------------------------
    // rotate gestures (sharp begin, curved move, sharp end)
    // ------------------------------------------------------------------

    /// Dispatches a rotation around `center` starting at `begin`. The
    /// signed `arc_angle` goes to the provider unchanged; the sign encodes
    /// the direction, the magnitude the sweep.
    pub fn rotate_at(
        &self,
        center: Position,
        begin: Position,
        arc_angle: f64,
        options: &OptionBag,
    ) -> Result<()> {
        self.gesture.rotate(center, begin, arc_angle, options)?;
        Ok(())
    }

    pub fn rotate_element(&self, element: &Element, params: &RotateParams) -> Result<()> {
        let center = element.position_at(params.center_rel);
        let begin = match params.begin {
            Some(pos) => pos,
            None => project_along_angle(
                element.bounding_box(),
                center,
                params.begin_angle,
                params.radius,
            ),
        };
        self.rotate_at(center, begin, params.arc_angle, &params.options)
    }

    // ------------------------------------------------------------------
    // image and text retrieval
    // ------------------------------------------------------------------

    /// Polls for `image_id` and returns the raw result for inspection; an
    /// empty result is not an error here. `None` falls back to the
    /// configured locate timeout.
    pub fn locate_image(
        &self,
        image_id: &str,
        locate_timeout: Option<Duration>,
        force_reload: bool,
        options: &OptionBag,
    ) -> Result<LocateResult> {
        let timeout = self.effective_timeout(locate_timeout);
        Ok(locator::locate_image(
            self.vision.as_ref(),
            image_id,
            timeout,
            force_reload,
            options,
        )?)
    }

    /// Polls for `text` and returns the raw result for inspection.
    pub fn locate_text(
        &self,
        text: &str,
        locate_timeout: Option<Duration>,
        options: &OptionBag,
    ) -> Result<LocateResult> {
        let timeout = self.effective_timeout(locate_timeout);
        Ok(locator::locate_text(
            self.vision.as_ref(),
            text,
            timeout,
            options,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use robotui_core::ANGLE_RIGHT;
    use robotui_core::ANGLE_UP;

    use crate::test_support::GestureCall;
    use crate::test_support::MockGesture;
    use crate::test_support::MockVision;

    fn facade(
        vision: MockVision,
        gesture: MockGesture,
    ) -> UserInteraction<MockVision, MockGesture> {
        UserInteraction::with_config(
            Arc::new(vision),
            Arc::new(gesture),
            InteractionConfig::from_env(),
        )
    }

    #[test]
    fn test_tap_text_not_recognized_names_target() {
        let ui = facade(MockVision::new(), MockGesture::new());

        let err = ui
            .tap_text("missing", &TapParams::default())
            .expect_err("must fail");

        assert!(matches!(err, InteractionError::TextNotRecognized(_)));
        assert_eq!(err.target(), Some("missing"));
        assert_eq!(ui.gesture().call_count(), 0);
    }

    #[test]
    fn test_tap_image_not_recognized_names_target() {
        let ui = facade(MockVision::new(), MockGesture::new());

        let err = ui
            .tap_image("absent.png", &TapParams::default())
            .expect_err("must fail");

        assert!(matches!(err, InteractionError::ImageNotRecognized(_)));
        assert_eq!(err.target(), Some("absent.png"));
    }

    #[test]
    fn test_resolve_picks_first_ranked_element() {
        let ranked = vec![
            Element::rectangle(Position::new(0.0, 0.0), Position::new(0.2, 0.2)),
            Element::rectangle(Position::new(0.8, 0.8), Position::new(1.0, 1.0)),
        ];
        let vision = MockVision::builder().with_result(ranked).build();
        let ui = facade(vision, MockGesture::new());

        ui.tap_text("OK", &TapParams::default()).expect("tap");

        assert_eq!(
            ui.gesture().last_call(),
            Some(GestureCall::Tap {
                pos: Position::new(0.1, 0.1),
                duration: Duration::ZERO,
                options: OptionBag::new(),
            })
        );
    }

    #[test]
    fn test_relative_position_applies_to_located_element() {
        let found = vec![Element::rectangle(
            Position::new(0.0, 0.0),
            Position::new(0.4, 0.4),
        )];
        let vision = MockVision::builder().with_result(found).build();
        let ui = facade(vision, MockGesture::new());

        let params = TapParams {
            rel: Position::new(1.0, 0.0),
            ..TapParams::default()
        };
        ui.tap_text("OK", &params).expect("tap");

        assert_eq!(
            ui.gesture().last_call(),
            Some(GestureCall::Tap {
                pos: Position::new(0.4, 0.0),
                duration: Duration::ZERO,
                options: OptionBag::new(),
            })
        );
    }

    #[test]
    fn test_direction_preempts_end_element() {
        let begin = Element::rectangle(Position::new(0.4, 0.4), Position::new(0.6, 0.6));
        let end = Element::point(Position::new(0.9, 0.9));
        let ui = facade(MockVision::new(), MockGesture::new());

        let params = SwipeParams {
            direction: Some(Direction::toward(ANGLE_UP)),
            ..SwipeParams::default()
        };
        ui.swipe_element(&begin, &end, &params).expect("swipe");

        assert_eq!(
            ui.gesture().last_call(),
            Some(GestureCall::Swipe {
                begin: Position::new(0.5, 0.5),
                end: Position::new(0.5, 0.0),
                options: OptionBag::new(),
            })
        );
    }

    #[test]
    fn test_directional_swipe_scales_distance() {
        let begin = Element::point(Position::new(0.5, 0.5));
        let end = Element::point(Position::new(0.5, 0.5));
        let ui = facade(MockVision::new(), MockGesture::new());

        let params = SwipeParams {
            direction: Some(Direction::new(ANGLE_RIGHT, 0.5)),
            ..SwipeParams::default()
        };
        ui.swipe_element(&begin, &end, &params).expect("swipe");

        assert_eq!(
            ui.gesture().last_call(),
            Some(GestureCall::Swipe {
                begin: Position::new(0.5, 0.5),
                end: Position::new(0.75, 0.5),
                options: OptionBag::new(),
            })
        );
    }

    #[test]
    fn test_drag_image_without_end_target_uses_work_area() {
        let found = vec![Element::point(Position::new(0.5, 0.9))];
        let vision = MockVision::builder().with_result(found).build();
        let ui = facade(vision, MockGesture::new());

        let params = DragParams {
            end_rel: Position::new(0.25, 0.25),
            ..DragParams::default()
        };
        ui.drag_image("slider.png", None, &params).expect("drag");

        assert_eq!(
            ui.gesture().last_call(),
            Some(GestureCall::Drag {
                begin: Position::new(0.5, 0.9),
                end: Position::new(0.25, 0.25),
                begin_duration: Duration::ZERO,
                end_duration: Duration::ZERO,
                options: OptionBag::new(),
            })
        );
    }

    #[test]
    fn test_rotate_element_derives_begin_from_angle_and_radius() {
        let element = Element::rectangle(Position::new(0.0, 0.0), Position::new(1.0, 1.0));
        let ui = facade(MockVision::new(), MockGesture::new());

        let params = RotateParams {
            radius: 0.8,
            arc_angle: 90.0,
            ..RotateParams::default()
        };
        ui.rotate_element(&element, &params).expect("rotate");

        // begin_angle defaults to up: 80% of the way from the center toward
        // the top edge of the element.
        match ui.gesture().last_call() {
            Some(GestureCall::Rotate {
                center,
                begin,
                arc_angle,
                ..
            }) => {
                assert_eq!(center, Position::new(0.5, 0.5));
                assert!((begin.x - 0.5).abs() < 1e-9);
                assert!((begin.y - 0.1).abs() < 1e-9);
                assert_eq!(arc_angle, 90.0);
            }
            other => panic!("expected rotate call, got {:?}", other),
        }
    }

    #[test]
    fn test_gesture_error_propagates_unchanged() {
        let gesture =
            MockGesture::failing(crate::test_support::MockGestureError::Device("offline".into()));
        let ui = facade(MockVision::new(), gesture);

        let err = ui
            .tap_at(Position::CENTER, Duration::ZERO, &OptionBag::new())
            .expect_err("must fail");

        assert!(matches!(
            err,
            InteractionError::Gesture(crate::ports::GestureError::Device(_))
        ));
    }

    #[test]
    fn test_locate_passthrough_returns_empty_without_error() {
        let ui = facade(MockVision::new(), MockGesture::new());

        let found = ui
            .locate_image("absent.png", None, false, &OptionBag::new())
            .expect("locate passthrough");

        assert!(found.is_empty());
    }

    #[test]
    fn test_per_call_timeout_overrides_configured_default() {
        let vision = MockVision::builder()
            .with_found_after(2, vec![Element::point(Position::CENTER)])
            .build();
        let ui = UserInteraction::with_config(
            Arc::new(vision),
            Arc::new(MockGesture::new()),
            InteractionConfig::from_env().with_locate_timeout(Duration::ZERO),
        );

        // The configured default would stop after one poll; the per-call
        // timeout allows the retries needed to find the target.
        let found = ui
            .locate_text("late", Some(Duration::from_secs(5)), &OptionBag::new())
            .expect("locate");

        assert_eq!(found.len(), 1);
        assert_eq!(ui.vision().locate_call_count(), 3);
    }
}
