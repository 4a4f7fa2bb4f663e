use ib_core::{Diagnostic, FileDiagnostics, FileSystem, Language, SensorContext, SourceFile};

use crate::{route, IssueAssembler, Routing, SensorSummary, Settings};

pub type ContextFile<C> = <<C as SensorContext>::FileSystem as FileSystem>::File;

/// Turns the diagnostics of one analysis into issues saved on the sensor context.
pub struct IssuesLoader<'a, C> {
    cx: &'a C,
    settings: Settings,
    language: Language,
}

impl<'a, C: SensorContext> IssuesLoader<'a, C> {
    pub fn new(cx: &'a C) -> Self {
        let settings = Settings::from_config(cx.config());
        tracing::debug!(?settings, "loaded settings");
        Self { cx, settings, language: Language::bsl(cx.config()) }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    /// Route `diagnostic`, build the resulting issue and save it.
    /// At most one issue is saved per call; none if the diagnostic is discarded.
    pub fn create_issue(&self, file: &ContextFile<C>, diagnostic: &Diagnostic) -> Routing {
        let routing = route(diagnostic, self.cx.active_rules(), &self.settings);
        tracing::debug!(
            file = %file.path().display(),
            range = %diagnostic.range,
            ?routing,
            "routed diagnostic"
        );

        let assembler = IssueAssembler::new(self.cx.file_system(), self.language.key());
        if let Some(record) = assembler.assemble(file, diagnostic, routing.clone()) {
            self.cx.save(record);
        }
        routing
    }

    /// Create the issues of every diagnostic reported for one file.
    pub fn load_file(&self, report: &FileDiagnostics) -> SensorSummary {
        let _span = tracing::debug_span!("load_file", path = %report.path.display()).entered();
        let mut summary = SensorSummary::default();

        let Some(file) = self.cx.file_system().input_file(self.language.key(), &report.path) else {
            tracing::warn!(
                path = %report.path.display(),
                diagnostics = report.diagnostics.len(),
                "skipping diagnostics of unknown file"
            );
            summary.skipped_files += 1;
            return summary;
        };

        summary.files += 1;
        for diagnostic in &report.diagnostics {
            summary.record(&self.create_issue(file, diagnostic));
        }
        summary
    }
}
