use course_core::model::LessonId;

/// Which panel of the course shell is showing.
///
/// Exactly one is active at a time; the lesson list is the home screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    List,
    Detail(LessonId),
    CatalogInfo,
    About,
}

impl Screen {
    #[must_use]
    pub fn open_lesson(self, id: LessonId) -> Self {
        Self::Detail(id)
    }

    #[must_use]
    pub fn back(self) -> Self {
        Self::List
    }

    /// The about button toggles: pressing it while About is open goes home.
    #[must_use]
    pub fn toggle_about(self) -> Self {
        match self {
            Self::About => Self::List,
            _ => Self::About,
        }
    }

    #[must_use]
    pub fn show_catalog_info(self) -> Self {
        Self::CatalogInfo
    }

    #[must_use]
    pub fn lesson(self) -> Option<LessonId> {
        match self {
            Self::Detail(id) => Some(id),
            _ => None,
        }
    }
}
