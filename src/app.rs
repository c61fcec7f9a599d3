use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;

use defs::{DefinitionChoices, Fetcher};
use tasks::Selections;
use workflow::{checks, descriptor};
use workflow::{DependencyChecker, Pipeline, Plan, TableCatalog, TaskConfig, WorkflowDef};

use crate::exec;
use crate::fs::Fs;
use crate::settings::Settings;
use crate::ui::Ui;

/// Task holding the DPL AOD reader options.
const AOD_READER: &str = "internal-dpl-aod-reader";

/// Files written into the output directory for one run.
#[derive(Debug, Default)]
struct Outputs {
    config: PathBuf,
    reader: Option<PathBuf>,
    writer: Option<PathBuf>,
}

/// This struct actually runs the command-line app.
pub struct App {
    /// Interpreted command line settings
    settings: Settings,
    /// Task flag values from the command line
    selections: Selections,
    /// Filesystem interface
    fs: Fs,
    /// User interface
    ui: Ui,
}

impl App {
    /// Create a new `App`.
    pub fn new(settings: Settings, selections: Selections) -> Self {
        let fs = Fs::new(&settings.output);
        let ui = Ui::new(&settings);
        Self {
            settings,
            selections,
            fs,
            ui,
        }
    }

    /// Configure the workflow named in settings, write its files, and run it.
    pub fn run(mut self) -> Result<()> {
        if self.settings.verbose > 0 {
            eprintln!("Using output directory {:?}", self.settings.output);
        }
        self.fs.ensure_output_dir_exists(self.settings.verbose > 0)?;
        self.check_environment();

        let def = self.settings.workflow.def();
        let mut config = self.load_config(def)?;
        let choices = self.load_definitions()?;

        self.configure(def, &mut config, &choices)?;
        let plan = self.make_plan(def, &config);
        let outputs = self.write_outputs(def, &config, &plan)?;
        let pipeline = self.make_pipeline(&plan, &outputs);

        self.ui.pipeline(&pipeline);
        println!("{}", pipeline.command_line());

        if self.settings.dry_run {
            eprintln!("\n{}", "Dry run; not running the pipeline.".green());
            return Ok(());
        }
        if !self.ui.confirm("Run the pipeline?")? {
            return Ok(());
        }

        let mut log_path = PathBuf::with_capacity(256);
        self.fs
            .pipeline_log(self.settings.workflow.name(), &mut log_path);
        eprintln!("\n{}.\n", "Starting pipeline".magenta());
        exec::run_pipeline(&pipeline, &log_path, &self.fs, self.ui.verbose)
            .with_context(|| format!("while running {} (log: {:?})", def.executable, log_path))?;
        eprintln!("\n{}.", "Pipeline complete".green());
        Ok(())
    }

    fn check_environment(&self) {
        for var in checks::check_environment(|v| std::env::var_os(v)) {
            log::warn!("{var} is not set; the O2Physics environment does not seem to be loaded");
        }
    }
}

// LOADING //////////////////
impl App {
    fn load_config(&mut self, def: &WorkflowDef) -> Result<TaskConfig> {
        self.ui
            .begin_with("Reading configuration file", &self.settings.config);
        let config = TaskConfig::load(&self.settings.config)?;
        checks::check_main_task(&config, def.main_task, &self.settings.config)?;
        self.ui.finish();
        Ok(config)
    }

    fn load_definitions(&mut self) -> Result<DefinitionChoices> {
        self.ui.begin("Fetching definition libraries");
        let fetcher = Fetcher::new(
            self.settings.defs_source.clone(),
            self.settings.defs_cache.clone(),
        );
        let files = fetcher
            .fetch()
            .context("while fetching definition libraries")?;
        self.ui.finish();

        let choices = DefinitionChoices::load(&files)?;
        self.ui.definitions(&choices);
        Ok(choices)
    }
}

// CONFIGURING //////////////
impl App {
    fn configure(
        &self,
        def: &WorkflowDef,
        config: &mut TaskConfig,
        choices: &DefinitionChoices,
    ) -> Result<()> {
        if self.selections.is_empty() {
            log::info!("no task options given; keeping the configuration file's values");
        }
        self.selections.validate_choices(choices)?;
        let written = self.selections.apply(config);
        log::info!(
            "{} task options set {written} configuration values",
            self.selections.len()
        );

        if let Some(aod) = &self.settings.aod {
            config.insert(AOD_READER, "aod-file", aod.to_arg());
        }
        if let Some((task, process)) = def.mandatory {
            checks::check_mandatory_process(config, task, process);
        }
        DependencyChecker::new(def.dependencies).check(config)?;
        Ok(())
    }

    fn make_plan(&self, def: &WorkflowDef, config: &TaskConfig) -> Plan {
        let mut plan = Plan::create(def, config);
        let trees = self.settings.aod_trees.as_slice();
        let added = plan.add_raw_helpers(def, trees, self.settings.add_track_prop);
        if added > 0 {
            log::info!("added {added} converter tasks");
        }
        plan
    }
}

// WRITING //////////////////
impl App {
    fn write_outputs(
        &self,
        def: &WorkflowDef,
        config: &TaskConfig,
        plan: &Plan,
    ) -> Result<Outputs> {
        let mut outputs = Outputs::default();
        self.fs
            .temp_config(self.settings.workflow.name(), &mut outputs.config);
        self.fs
            .write_file(&outputs.config, &config.to_json_pretty()?)
            .context("while writing task configuration")?;

        let catalog = TableCatalog::reduced();
        let debug = self.settings.debug_descriptors;

        if !plan.tables_to_read.is_empty() {
            let doc =
                descriptor::reader_document(plan.tables_to_read.as_slice(), &catalog, debug)?;
            let mut path = PathBuf::new();
            self.fs.reader_config(&mut path);
            self.fs.write_json(&path, &doc)?;
            outputs.reader = Some(path);
        }

        if !plan.tables_to_produce.is_empty() && !def.resfile.is_empty() {
            let doc = descriptor::writer_document(
                plan.tables_to_produce.as_slice(),
                &catalog,
                def.resfile,
                debug,
            )?;
            let mut path = PathBuf::new();
            self.fs.writer_config(&mut path);
            self.fs.write_json(&path, &doc)?;
            outputs.writer = Some(path);
        }

        Ok(outputs)
    }

    fn make_pipeline(&self, plan: &Plan, outputs: &Outputs) -> Pipeline {
        let mut pipeline = Pipeline::new(&plan.run_list, &outputs.config);
        if let Some(writer) = &outputs.writer {
            pipeline.main_option("aod-writer-json", &writer.display().to_string());
        }
        if let Some(reader) = &outputs.reader {
            pipeline.main_option("aod-reader-json", &reader.display().to_string());
        }
        pipeline
    }
}
