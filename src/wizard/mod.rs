//! The wizard: owns every component and moves between views.

mod state;

pub use state::{back_edge, BackEdge, EntryReason, Flow, Transition, ViewState};

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::Frame;

use crate::browser::{Activation, FileBrowser};
use crate::defaults::Defaults;
use crate::kube::{BuildRequest, SecretBuilder};
use crate::secrets::{is_structured, FileMode, SecretSpec};
use crate::ui::common_nav::{esc_to_back, is_quit_combo};
use crate::ui::form::{FocusDirection, FormField, FormInputGroup, Submit};
use crate::ui::style::Theme;

const NAMESPACE_FIELD: usize = 0;
const SECRET_NAME_FIELD: usize = 1;
const SECRET_KEY_FIELD: usize = 2;

/// Where the wizard starts browsing and where it writes.
#[derive(Debug, Clone)]
pub struct WizardConfig {
    pub source_dir: PathBuf,
    pub cert_dir: PathBuf,
    pub output_path: PathBuf,
}

/// What was written once the wizard finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub spec: SecretSpec,
    pub output_path: PathBuf,
}

impl Outcome {
    pub fn sealed(&self) -> bool {
        self.spec.certificate_path.is_some()
    }
}

pub struct WizardController {
    state: ViewState,
    entered_via: [EntryReason; ViewState::ALL.len()],

    source_browser: FileBrowser,
    cert_browser: FileBrowser,
    form: FormInputGroup,
    mode_cursor: usize,

    selected_file: Option<PathBuf>,
    file_mode: Option<FileMode>,
    certificate: Option<PathBuf>,
    // form values as of the last successful submit
    submitted: Option<Vec<String>>,
    outcome: Option<Outcome>,

    output_path: PathBuf,
    builder: Box<dyn SecretBuilder>,
}

impl WizardController {
    pub fn new(config: WizardConfig, builder: Box<dyn SecretBuilder>) -> Self {
        let mut cert_browser = FileBrowser::new(config.cert_dir);
        cert_browser.set_focused(false);
        Self {
            state: ViewState::FilePicker,
            entered_via: Default::default(),
            source_browser: FileBrowser::new(config.source_dir),
            cert_browser,
            form: FormInputGroup::new(vec![
                FormField::new(Defaults::NAMESPACE_LABEL, Defaults::NAMESPACE_PLACEHOLDER),
                FormField::new(Defaults::SECRET_NAME_LABEL, Defaults::SECRET_NAME_PLACEHOLDER),
                secret_key_field(),
            ]),
            mode_cursor: 0,
            selected_file: None,
            file_mode: None,
            certificate: None,
            submitted: None,
            outcome: None,
            output_path: config.output_path,
            builder,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn entered_via(&self, state: ViewState) -> EntryReason {
        self.entered_via[state.index()]
    }

    pub fn source_browser(&self) -> &FileBrowser {
        &self.source_browser
    }

    pub fn cert_browser(&self) -> &FileBrowser {
        &self.cert_browser
    }

    pub fn form(&self) -> &FormInputGroup {
        &self.form
    }

    pub fn mode_cursor(&self) -> usize {
        self.mode_cursor
    }

    pub fn selected_file(&self) -> Option<&Path> {
        self.selected_file.as_deref()
    }

    pub fn file_mode(&self) -> Option<FileMode> {
        self.file_mode
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn draw(&self, f: &mut Frame<'_>, theme: &Theme) {
        crate::screens::draw(f, self, theme);
    }

    /// Handles one key press completely before returning.
    /// Errors are fatal for the session.
    pub async fn on_key(&mut self, k: KeyEvent) -> Result<Flow> {
        if is_quit_combo(k) {
            tracing::info!(state = ?self.state, "quit requested");
            return Ok(Flow::Exit);
        }

        let transition = if self.state == ViewState::Result {
            Transition::Quit
        } else if let Some(t) = esc_to_back(k) {
            t
        } else {
            match self.state {
                ViewState::FilePicker => self.on_file_picker_key(k),
                ViewState::FileModeChoice => self.on_file_mode_key(k),
                ViewState::TextInputs => self.on_text_inputs_key(k),
                ViewState::CertPicker => self.on_cert_picker_key(k).await?,
                ViewState::Result => Transition::Quit,
            }
        };

        Ok(self.apply(transition))
    }

    fn apply(&mut self, t: Transition) -> Flow {
        match t {
            Transition::Stay => Flow::Continue,
            Transition::Quit => Flow::Exit,
            Transition::Goto(next, reason) => {
                self.entered_via[next.index()] = reason;
                if next == ViewState::TextInputs {
                    self.prepare_form();
                }
                self.set_state(next);
                Flow::Continue
            }
            Transition::Back => match back_edge(self.state, self.entered_via(self.state)) {
                BackEdge::Exit => Flow::Exit,
                BackEdge::To(prev) => {
                    self.set_state(prev);
                    Flow::Continue
                }
            },
        }
    }

    fn set_state(&mut self, next: ViewState) {
        tracing::debug!(from = ?self.state, to = ?next, "view change");
        self.state = next;
        if next == ViewState::TextInputs {
            self.submitted = None;
        }
        self.source_browser.set_focused(next == ViewState::FilePicker);
        self.cert_browser.set_focused(next == ViewState::CertPicker);
    }

    /// The secret key field exists only in raw-file mode; other values survive the switch.
    fn prepare_form(&mut self) {
        match self.file_mode {
            Some(FileMode::RawFile) if self.form.len() == SECRET_KEY_FIELD => {
                self.form.push_field(secret_key_field());
            }
            Some(FileMode::YamlMap) if self.form.len() > SECRET_KEY_FIELD => {
                self.form.pop_field();
            }
            _ => {}
        }
        self.form.focus_at(0);
    }

    fn on_file_picker_key(&mut self, k: KeyEvent) -> Transition {
        if k.code != KeyCode::Enter {
            self.source_browser.on_key(k);
            return Transition::Stay;
        }
        let Activation::Chosen(path) = self.source_browser.activate() else {
            return Transition::Stay;
        };

        tracing::info!(file = %path.display(), "secret source selected");
        let structured = is_structured(&path);
        self.selected_file = Some(path);
        if structured {
            Transition::Goto(ViewState::FileModeChoice, EntryReason::Direct)
        } else {
            self.file_mode = Some(FileMode::RawFile);
            Transition::Goto(ViewState::TextInputs, EntryReason::Direct)
        }
    }

    fn on_file_mode_key(&mut self, k: KeyEvent) -> Transition {
        let n = FileMode::ALL.len();
        match k.code {
            KeyCode::Up | KeyCode::BackTab => self.mode_cursor = (self.mode_cursor + n - 1) % n,
            KeyCode::Down | KeyCode::Tab => self.mode_cursor = (self.mode_cursor + 1) % n,
            KeyCode::Enter => {
                let mode = FileMode::ALL[self.mode_cursor];
                tracing::info!(%mode, "file mode chosen");
                self.file_mode = Some(mode);
                return Transition::Goto(ViewState::TextInputs, EntryReason::ViaFileModeChoice);
            }
            _ => {}
        }
        Transition::Stay
    }

    fn on_text_inputs_key(&mut self, k: KeyEvent) -> Transition {
        match k.code {
            KeyCode::Tab | KeyCode::Down => self.form.move_focus(FocusDirection::Forward),
            KeyCode::BackTab | KeyCode::Up => self.form.move_focus(FocusDirection::Backward),
            KeyCode::Enter => match self.form.try_submit() {
                Submit::Ready(values) => {
                    self.submitted = Some(values);
                    return Transition::Goto(ViewState::CertPicker, EntryReason::Direct);
                }
                Submit::ValidationFailed(idx) => tracing::debug!(field = idx, "empty field refocused"),
                Submit::Pending => {}
            },
            _ => {
                self.form.edit_focused(k);
            }
        }
        Transition::Stay
    }

    async fn on_cert_picker_key(&mut self, k: KeyEvent) -> Result<Transition> {
        match k.code {
            KeyCode::Char('s') if !k.modifiers.contains(KeyModifiers::CONTROL) => {
                self.certificate = None;
            }
            KeyCode::Enter => match self.cert_browser.activate() {
                Activation::Chosen(path) => self.certificate = Some(path),
                Activation::Navigated | Activation::Failed => return Ok(Transition::Stay),
            },
            _ => {
                self.cert_browser.on_key(k);
                return Ok(Transition::Stay);
            }
        }

        self.finish().await?;
        Ok(Transition::Goto(ViewState::Result, EntryReason::Direct))
    }

    /// Assembles a `SecretSpec` from everything collected so far.
    pub fn secret_spec(&self) -> Result<SecretSpec> {
        let source_path = self.selected_file.clone().ok_or_else(|| anyhow!("no secret file selected"))?;
        let mode = self.file_mode.ok_or_else(|| anyhow!("no file mode chosen"))?;
        let values = self.submitted.as_ref().ok_or_else(|| anyhow!("text inputs not submitted"))?;
        let field = |idx: usize| values.get(idx).cloned().unwrap_or_default();
        Ok(SecretSpec {
            mode,
            source_path,
            secret_key: (mode == FileMode::RawFile).then(|| field(SECRET_KEY_FIELD)),
            namespace: field(NAMESPACE_FIELD),
            secret_name: field(SECRET_NAME_FIELD),
            certificate_path: self.certificate.clone(),
        })
    }

    /// Builds the manifest and writes it. The event loop is blocked meanwhile.
    async fn finish(&mut self) -> Result<()> {
        let spec = self.secret_spec()?;
        let request = BuildRequest {
            secrets: spec.load_secrets()?,
            namespace: spec.namespace.clone(),
            secret_name: spec.secret_name.clone(),
            certificate_path: spec.certificate_path.clone(),
        };

        let manifest = self.builder.build(&request).await?;
        fs::write(&self.output_path, &manifest)
            .with_context(|| format!("writing {}", self.output_path.display()))?;

        tracing::info!(
            path = %self.output_path.display(),
            bytes = manifest.len(),
            sealed = spec.certificate_path.is_some(),
            "secret written"
        );
        self.outcome = Some(Outcome { spec, output_path: self.output_path.clone() });
        Ok(())
    }
}

fn secret_key_field() -> FormField {
    FormField::new(Defaults::SECRET_KEY_LABEL, Defaults::SECRET_KEY_PLACEHOLDER)
}
