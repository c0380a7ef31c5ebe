/// Whether the tracking engine currently sees the marker.
///
/// Written only by the found/lost events; read by the input router to gate
/// drag rotation and by the shell to render the status label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MarkerVisibility {
    visible: bool,
}

impl MarkerVisibility {
    pub fn found(&mut self) {
        if !self.visible {
            log::info!("[marker] found");
        }
        self.visible = true;
    }

    pub fn lost(&mut self) {
        if self.visible {
            log::info!("[marker] lost");
        }
        self.visible = false;
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn status(&self) -> MarkerStatus {
        if self.visible {
            MarkerStatus::Detected
        } else {
            MarkerStatus::Searching
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerStatus {
    Searching,
    Detected,
}

impl MarkerStatus {
    pub fn label(self) -> &'static str {
        match self {
            MarkerStatus::Searching => "Cari Marker...",
            MarkerStatus::Detected => "Marker Terdeteksi",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            MarkerStatus::Searching => "#8a3324", // brick red
            MarkerStatus::Detected => "#27ae60", // green
        }
    }

    /// Only the detected state changes the label background; searching keeps
    /// whatever background was last set.
    pub fn background(self) -> Option<&'static str> {
        match self {
            MarkerStatus::Searching => None,
            MarkerStatus::Detected => Some("rgba(255,255,255,0.9)"),
        }
    }
}
