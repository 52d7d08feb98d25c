use gtk4::prelude::*;
use gtk4::{ApplicationWindow, CssProvider};
use libadwaita::prelude::*;
use libadwaita::{Application as AdwApplication, ColorScheme, StyleManager};
use octopanel_communication::{OctoPrintClient, PrinterClient, RecordingClient, UnavailableClient};
use octopanel_core::{shared, Error, Result, Shared};
use octopanel_settings::{Config, Theme};
use std::rc::Rc;

use crate::ui::gtk::home::register_panels;
use crate::ui::gtk::UiContext;

pub const APP_ID: &str = "com.github.octopanel.OctoPanel";

/// Run the application until its window closes. Fails when the panels could
/// not be built or GTK reports an error exit.
pub fn run(config: Config) -> Result<()> {
    let app = AdwApplication::builder().application_id(APP_ID).build();

    // Lives as long as the application; panels stay registered until exit
    let context: Shared<Option<UiContext>> = shared(None);
    let failure: Shared<Option<Error>> = shared(None);

    app.connect_startup(|_| {
        load_css();
    });

    let failure_c = failure.clone();
    app.connect_activate(move |app| {
        if let Some(window) = app.active_window() {
            window.present();
            return;
        }

        apply_theme(config.ui.theme);

        let ctx = UiContext::new(config.clone(), build_client(&config));
        let home = match register_panels(&ctx) {
            Ok(home) => home,
            Err(e) => {
                tracing::error!("Failed to build panels: {}", e);
                failure_c.borrow_mut().replace(e);
                app.quit();
                return;
            }
        };

        let window = ApplicationWindow::builder()
            .application(app)
            .title("OctoPanel")
            .default_width(config.ui.window_width as i32)
            .default_height(config.ui.window_height as i32)
            .child(ctx.navigator.widget())
            .build();

        if config.ui.fullscreen {
            window.fullscreen();
        }
        window.present();

        // Query after the first frame so a slow printer does not delay the window
        glib::idle_add_local_once(move || home.refresh_connection());

        context.borrow_mut().replace(ctx);
    });

    let code = app.run_with_args::<&str>(&[]);
    let failed = failure.borrow_mut().take();
    exit_result(failed, code)
}

/// A recorded startup failure wins over GTK's own exit code.
fn exit_result(failure: Option<Error>, code: glib::ExitCode) -> Result<()> {
    if let Some(err) = failure {
        return Err(err);
    }
    if code != glib::ExitCode::SUCCESS {
        return Err(Error::other("GTK application exited with an error"));
    }
    Ok(())
}

/// Pick the printer client. Dry runs only record requests; a client that
/// cannot be created fails every request with the reason.
fn build_client(config: &Config) -> Rc<dyn PrinterClient> {
    if config.printer.dry_run {
        tracing::warn!("Dry run: printer requests are recorded, not sent");
        return Rc::new(RecordingClient::new());
    }

    match OctoPrintClient::new(&config.printer.client_params()) {
        Ok(client) => {
            tracing::info!("Using OctoPrint at {}", client.endpoint());
            Rc::new(client)
        }
        Err(e) => {
            tracing::error!("Cannot create OctoPrint client: {}", e);
            Rc::new(UnavailableClient::new(e.to_string()))
        }
    }
}

fn apply_theme(theme: Theme) {
    let scheme = match theme {
        Theme::System => ColorScheme::Default,
        Theme::Light => ColorScheme::ForceLight,
        Theme::Dark => ColorScheme::ForceDark,
    };
    StyleManager::default().set_color_scheme(scheme);
}

fn load_css() {
    let provider = CssProvider::new();
    provider.load_from_data(include_str!("ui/gtk/style.css"));

    match gtk4::gdk::Display::default() {
        Some(display) => gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        ),
        None => tracing::error!("No display available, skipping stylesheet"),
    }
}
