//! GTK window hosting the bundled page in a WebKit view

use anyhow::{Context, Result};
use gtk::glib;
use gtk::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use webkit2gtk::{LoadEvent, WebView, WebViewExt};

use crate::common::launch::Launcher;
use crate::settings::WelcomeSettings;
use crate::ui::prelude::*;

use super::data::DataDir;
use super::dispatch::Dispatcher;
use super::page::{LoadStage, PageAction, on_load};

const WINDOW_CLASS: &str = "Antergos Welcome";

fn run_scripts(view: &WebView, scripts: &[String]) {
    for script in scripts {
        view.run_javascript(script, None::<&gtk::gio::Cancellable>, |result| {
            if let Err(e) = result {
                emit(
                    Level::Debug,
                    "welcome.script.error",
                    &format!("Script failed: {}", e),
                    None,
                );
            }
        });
    }
}

fn on_load_changed<L: Launcher>(
    view: &WebView,
    event: LoadEvent,
    dispatcher: &RefCell<Dispatcher<L>>,
) {
    let stage = match event {
        LoadEvent::Started => LoadStage::Started,
        LoadEvent::Finished => LoadStage::Finished,
        _ => return,
    };

    let uri = view.uri();
    let action = {
        let mut dispatcher = dispatcher.borrow_mut();
        on_load(&mut *dispatcher, stage, uri.as_ref().map(|uri| uri.as_str()))
    };
    match action {
        PageAction::Push(scripts) => run_scripts(view, &scripts),
        PageAction::Quit => gtk::main_quit(),
        PageAction::Nothing => {}
    }
}

/// Build the window and run the GTK main loop until it is closed
pub fn run_window<L: Launcher + 'static>(
    dispatcher: Dispatcher<L>,
    data: &DataDir,
    settings: &WelcomeSettings,
) -> Result<()> {
    glib::set_prgname(Some(WINDOW_CLASS));
    glib::set_application_name(WINDOW_CLASS);
    gtk::init().context("Failed to initialize GTK")?;

    let window = gtk::Window::new(gtk::WindowType::Toplevel);
    window.set_position(gtk::WindowPosition::Center);
    window.set_title("");
    window.set_size_request(settings.width, settings.height);

    let icon = data.icon_path();
    if let Err(e) = window.set_icon_from_file(&icon) {
        emit(
            Level::Warn,
            "welcome.window.icon",
            &format!("Could not load icon {}: {}", icon.display(), e),
            None,
        );
    }

    let view = WebView::new();
    let dispatcher = Rc::new(RefCell::new(dispatcher));

    let shared = Rc::clone(&dispatcher);
    view.connect_load_changed(move |view, event| on_load_changed(view, event, &shared));
    // Handled: no error page, no retry
    view.connect_load_failed(|_, _, _, _| true);

    let uri = data.index_uri();
    emit(
        Level::Debug,
        "welcome.window.load",
        &format!("Loading {}", uri),
        None,
    );
    view.load_uri(&uri);

    let scrolled = gtk::ScrolledWindow::builder()
        .hscrollbar_policy(gtk::PolicyType::Never)
        .vscrollbar_policy(gtk::PolicyType::Automatic)
        .build();
    scrolled.add(&view);

    let container = gtk::Box::new(gtk::Orientation::Vertical, 0);
    container.pack_start(&scrolled, true, true, 0);

    window.add(&container);
    window.connect_delete_event(|_, _| {
        gtk::main_quit();
        glib::Propagation::Proceed
    });
    window.show_all();

    gtk::main();
    Ok(())
}
