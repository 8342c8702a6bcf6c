use std::{
    error::Error,
    sync::{
        mpsc::{self, Receiver, Sender},
        Arc, Mutex,
    },
    time::{Duration, Instant},
};

use eframe::egui;

use crate::{
    clipboard::SystemClipboard,
    config::{
        consts::{APP_TITLE, PREVIEW_TIMEOUT_MS, TOAST_MS},
        state::AppState,
    },
    error::ExtractError,
    model::ElementDescriptor,
    preview::ProbeEvent,
    session::Session,
    toast::Toasts,
};

use super::components;

pub type ExtractResult = Result<Vec<ElementDescriptor>, ExtractError>;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub session: Session,

    pub toasts: Toasts,
    pub clipboard: SystemClipboard,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // status line (workers write here)
    pub status: Arc<Mutex<String>>,

    // worker channels, polled once per frame
    pub extract_rx: Option<Receiver<ExtractResult>>,
    pub probe_tx: Sender<ProbeEvent>,
    pub probe_rx: Receiver<ProbeEvent>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into();
        let (probe_tx, probe_rx) = mpsc::channel();

        logf!("Init: out_path={}", out_path_text);

        Self {
            state,
            session: Session::new(Duration::from_millis(PREVIEW_TIMEOUT_MS)),
            toasts: Toasts::new(Duration::from_millis(TOAST_MS)),
            clipboard: SystemClipboard::new(),
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
            extract_rx: None,
            probe_tx,
            probe_rx,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Toast for a plain outcome message.
    pub fn notify(&mut self, ok: bool, msg: impl Into<String>) {
        let now = Instant::now();
        if ok {
            self.toasts.info(msg, now);
        } else {
            self.toasts.error(msg, now);
        }
    }

    /// Drain worker channels and run timers. Returns how soon the next
    /// frame is needed, if anything is pending.
    fn poll(&mut self) -> Option<Duration> {
        if let Some(recv) = self.extract_rx.as_ref().map(|rx| rx.try_recv()) {
            match recv {
                Ok(result) => {
                    let found = result.as_ref().map(|v| v.len()).ok();
                    self.session.finish_extract(result);
                    self.extract_rx = None;
                    match found {
                        Some(n) => self.status(format!("Found {n} elements")),
                        None => self.status("Extraction failed"),
                    }
                }
                Err(mpsc::TryRecvError::Empty) => {}
                Err(mpsc::TryRecvError::Disconnected) => {
                    self.session.finish_extract(Err(ExtractError::Failed(s!("worker stopped"))));
                    self.extract_rx = None;
                }
            }
        }

        while let Ok(ev) = self.probe_rx.try_recv() {
            self.session.preview.resolve(ev);
        }

        let now = Instant::now();
        self.session.preview.tick(now);

        let mut next = self.toasts.prune(now);
        if let Some(left) = self.session.preview.remaining(now) {
            next = Some(next.map_or(left, |n| n.min(left)));
        }
        if self.extract_rx.is_some() {
            next = Some(next.map_or(Duration::from_millis(100), |n| n.min(Duration::from_millis(100))));
        }
        next
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(after) = self.poll() {
            ctx.request_repaint_after(after);
        }

        egui::TopBottomPanel::top("url_bar").show(ctx, |ui| {
            components::url_bar::draw(ui, self);
            components::error_banner::draw(ui, self);
        });

        if self.session.preview.is_visible() {
            egui::SidePanel::right("preview")
                .resizable(true)
                .default_width(self.state.gui.preview_width)
                .show(ctx, |ui| {
                    components::preview_panel::draw(ui, self);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.session.is_extracting() {
                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new().size(16.0));
                    ui.label(self.status_text());
                });
                return;
            }
            if !self.session.results_visible() {
                ui.label("Enter a URL and press Extract XPaths.");
                return;
            }

            components::action_bar::draw(ui, self);

            ui.separator();

            components::filter_tabs::draw(ui, self);

            ui.separator();

            components::results_list::draw(ui, self);
        });

        components::toasts::draw(ctx, self);
    }
}
