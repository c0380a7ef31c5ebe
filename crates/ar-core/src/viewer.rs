//! The viewer context: one instance of every component, fed one event at a
//! time in arrival order.

use crate::config::ViewerConfig;
use crate::controls::ControlButton;
use crate::error::Result;
use crate::hotspot::{HotspotCatalog, HotspotDispatcher, PopupRequest};
use crate::input::{Contacts, InputRouter, MoveOutcome};
use crate::marker::MarkerVisibility;
use crate::pose::{Pose, PoseLimits, PoseMachine, PoseObserver};
use crate::scene::SceneTransform;

#[derive(Clone, Debug, PartialEq)]
pub enum ViewerEvent<'a, T: ?Sized> {
    MarkerFound,
    MarkerLost,
    Press { target: &'a T, contacts: Contacts },
    Move { contacts: Contacts },
    Release,
    Button(ControlButton),
    HotspotClick(&'a str),
    ClosePopup,
}

pub struct Viewer<T: ?Sized> {
    config: ViewerConfig,
    pub pose: PoseMachine,
    pub router: InputRouter<T>,
    pub marker: MarkerVisibility,
    pub hotspots: HotspotDispatcher,
}

impl<T: ?Sized> Viewer<T> {
    pub fn new(
        config: ViewerConfig,
        is_interactive: impl Fn(&T) -> bool + 'static,
        catalog: HotspotCatalog,
    ) -> Result<Self> {
        config.validate()?;
        let hotspots = HotspotDispatcher::new(catalog, config.contact_recipient.clone());
        Ok(Self {
            pose: PoseMachine::new(PoseLimits::from(&config)),
            router: InputRouter::new(is_interactive),
            marker: MarkerVisibility::default(),
            hotspots,
            config,
        })
    }

    #[inline]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Wire the renderer. The observer sees the scene-ready transform.
    pub fn on_scene_changed(&mut self, mut apply: impl FnMut(&SceneTransform) + 'static) {
        let tilt = self.config.base_tilt_deg;
        self.pose.set_observer(move |pose: &Pose| {
            apply(&SceneTransform::from_pose(pose, tilt));
        });
    }

    pub fn set_pose_observer(&mut self, observer: impl PoseObserver + 'static) {
        self.pose.set_observer(observer);
    }

    #[inline]
    pub fn scene_transform(&self) -> SceneTransform {
        SceneTransform::from_pose(&self.pose.current(), self.config.base_tilt_deg)
    }

    /// Route one event. Returns a popup request when the event produced one.
    pub fn handle(&mut self, event: ViewerEvent<'_, T>) -> Option<PopupRequest> {
        match event {
            ViewerEvent::MarkerFound => self.marker.found(),
            ViewerEvent::MarkerLost => self.marker.lost(),
            ViewerEvent::Press { target, contacts } => {
                self.router.press(target, &contacts);
            }
            ViewerEvent::Move { contacts } => {
                if let MoveOutcome::Tracked = self.router.pointer_move(
                    &contacts,
                    &self.marker,
                    &mut self.pose,
                ) {
                    log::trace!("[drag] marker hidden, pose held");
                }
            }
            ViewerEvent::Release => self.router.release(),
            ViewerEvent::Button(button) => button.apply(&mut self.pose),
            // Consumed here; never reaches the router.
            ViewerEvent::HotspotClick(key) => return self.hotspots.on_hotspot_click(key),
            ViewerEvent::ClosePopup => return Some(PopupRequest::Close),
        }
        None
    }
}

impl<T: ?Sized> std::fmt::Debug for Viewer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewer")
            .field("config", &self.config)
            .field("pose", &self.pose)
            .field("router", &self.router)
            .field("marker", &self.marker)
            .finish()
    }
}
