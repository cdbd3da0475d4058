//! GTK application shell: window lifecycle and signal wiring

use gtk4 as gtk;

use gtk::glib;
use gtk::prelude::*;
use gtk::{Application, ApplicationWindow, Label};

use std::cell::RefCell;
use std::rc::Rc;

use crate::collectors::location::{self, AppLocation};
use crate::icon::{self, IconSource};
use crate::{collect_info, display, Result};

const APP_ID: &str = "org.example.EgInfo";
const WINDOW_TITLE: &str = "Example Info";
const WINDOW_SIZE: i32 = 400;

/// Window lifecycle. GTK emits `startup` then `activate` exactly once
/// each; the transitions are one-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Created,
    Started,
    Shown,
}

struct ShellState {
    phase: Phase,
    location: AppLocation,
    window: Option<ApplicationWindow>,
}

/// Owns the GTK application and the single info window.
pub struct AppShell {
    state: Rc<RefCell<ShellState>>,
}

impl AppShell {
    pub fn new(location: AppLocation) -> Self {
        AppShell {
            state: Rc::new(RefCell::new(ShellState {
                phase: Phase::Created,
                location,
                window: None,
            })),
        }
    }

    /// Run the GTK main loop until the window is closed. Command-line
    /// arguments are not interpreted, so the application is run with an
    /// empty argument list.
    pub fn run(&self) -> glib::ExitCode {
        let app = Application::builder().application_id(APP_ID).build();

        let state = Rc::clone(&self.state);
        app.connect_startup(move |app| Self::on_startup(&state, app));

        let state = Rc::clone(&self.state);
        app.connect_activate(move |_| Self::on_activate(&state));

        app.run_with_args::<String>(&[])
    }

    /// Created -> Started: build the window, gather the info, populate
    /// the label.
    fn on_startup(state: &Rc<RefCell<ShellState>>, app: &Application) {
        let mut state = state.borrow_mut();
        if state.phase != Phase::Created {
            log::warn!("startup signal in phase {:?}, ignoring", state.phase);
            return;
        }

        let window = ApplicationWindow::builder()
            .application(app)
            .title(WINDOW_TITLE)
            .default_width(WINDOW_SIZE)
            .default_height(WINDOW_SIZE)
            .build();

        let icon = icon::resolve(&state.location.folder);
        apply_icon(&window, &icon, &state.location);

        let (info, failures) = collect_info(&state.location, icon.descriptor());
        for failure in &failures {
            log::warn!("probe degraded: {}", failure);
        }

        let label = Label::new(None);
        label.set_text(&display::render_report(&info));
        window.set_child(Some(&label));

        state.window = Some(window);
        state.phase = Phase::Started;
    }

    /// Started -> Shown: present the window. Terminal state.
    fn on_activate(state: &Rc<RefCell<ShellState>>) {
        let mut state = state.borrow_mut();
        if state.phase != Phase::Started {
            log::warn!("activate signal in phase {:?}, ignoring", state.phase);
            return;
        }

        if let Some(window) = &state.window {
            window.present();
        }
        state.phase = Phase::Shown;
    }
}

/// Point the window at the resolved icon. A file-backed icon is exposed
/// through the icon theme's search path; the named fallback goes straight
/// to the theme lookup.
fn apply_icon(window: &ApplicationWindow, icon: &IconSource, location: &AppLocation) {
    match icon {
        IconSource::File(path) => {
            if let Some(display) = gtk::gdk::Display::default() {
                let theme = gtk::IconTheme::for_display(&display);
                theme.add_search_path(location.folder.join("assets"));
            }
            let name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| icon::FALLBACK_ICON_NAME.to_string());
            window.set_icon_name(Some(&name));
        }
        IconSource::Named(name) => window.set_icon_name(Some(name)),
    }
}

/// Resolve the executable's location, then hand control to GTK. A
/// location failure propagates out before any window exists, so startup
/// aborts with a non-zero exit instead of showing a half-populated
/// window.
pub fn run() -> Result<glib::ExitCode> {
    let app_location = location::resolve()?;
    Ok(AppShell::new(app_location).run())
}
