// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use crate::location::Location;
use crate::ui::navbar::Section;

/// Screens the user can navigate between. Each corresponds to a page of the
/// web application the client fronts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Home,
    Auth,
    CarForm,
}

impl Screen {
    /// The canonical location path for a screen.
    pub fn path(self) -> &'static str {
        match self {
            Screen::Home => "/",
            Screen::Auth => "/accounts/auth/",
            Screen::CarForm => "/cars/manage/",
        }
    }

    /// Maps a location onto a screen, when one claims its path.
    pub fn for_location(location: &Location) -> Option<Screen> {
        let path = location.path();
        if path == "/" {
            Some(Screen::Home)
        } else if path.starts_with("/accounts") {
            Some(Screen::Auth)
        } else if path.starts_with("/cars") {
            Some(Screen::CarForm)
        } else {
            None
        }
    }

    /// The navbar section highlighting this screen.
    pub fn section(self) -> Section {
        match self {
            Screen::Home => Section::Home,
            Screen::Auth => Section::Auth,
            Screen::CarForm => Section::CarForm,
        }
    }

    /// The screen a navbar section opens.
    pub fn for_section(section: Section) -> Screen {
        match section {
            Section::Home => Screen::Home,
            Section::Auth => Screen::Auth,
            Section::CarForm => Screen::CarForm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_paths_round_trip() {
        for screen in [Screen::Home, Screen::Auth, Screen::CarForm] {
            let location = Location::parse(screen.path());
            assert_eq!(Screen::for_location(&location), Some(screen));
        }
    }

    #[test]
    fn unknown_path_maps_to_no_screen() {
        let location = Location::parse("/orders/5/");
        assert_eq!(Screen::for_location(&location), None);
    }

    #[test]
    fn auth_subpaths_map_to_auth() {
        let location = Location::parse("/accounts/auth/?tab=register");
        assert_eq!(Screen::for_location(&location), Some(Screen::Auth));
    }
}
