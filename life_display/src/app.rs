// app.rs - Simulation session driven by the host frame loop

use life::{Pattern, RowScheduler, Simulation, Step};
use tracing::{debug, error, info, warn};

use crate::fps::FpsLogger;
use crate::settings::Settings;
use crate::AppError;

/// Player commands, read from the keyboard each frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    StepOnce,
    Reseed,
    Clear,
    ApplyPattern,
}

pub struct LifeApp {
    sim: Simulation,
    scheduler: Option<RowScheduler>,
    pattern: Option<&'static Pattern>,
    density: f64,
    pause_on_cycle: bool,
    running: bool,
    cycle_reported: bool,
    last_step: Option<Step>,
    fps: FpsLogger,
}

impl LifeApp {
    /// Builds the starting grid and, if asked for, the row-task runtime.
    pub fn new(settings: &Settings) -> Result<Self, AppError> {
        settings.validate()?;

        let seed = settings.seed.unwrap_or_else(rand::random);
        let sim = settings.simulation(seed)?;
        let pattern = settings.pattern()?;
        let scheduler = if settings.row_tasks {
            Some(RowScheduler::new()?)
        } else {
            None
        };

        match pattern {
            Some(pattern) => info!(pattern = pattern.name, "starting from pattern"),
            None => info!(seed, density = settings.density, "starting from random cells"),
        }
        info!(
            columns = settings.columns,
            rows = settings.rows,
            population = sim.grid().population(),
            row_tasks = settings.row_tasks,
            "simulation ready"
        );

        Ok(Self {
            sim,
            scheduler,
            pattern,
            density: settings.density,
            pause_on_cycle: settings.pause_on_cycle,
            running: !settings.paused,
            cycle_reported: false,
            last_step: None,
            fps: FpsLogger::default(),
        })
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn last_step(&self) -> Option<Step> {
        self.last_step
    }

    /// One host frame: log the frame rate, apply commands, then step if running.
    pub fn frame(&mut self, dt: f32, commands: &[Command]) {
        self.fps.log(dt);
        for &command in commands {
            self.command(command);
        }
        if self.running {
            self.advance();
        }
    }

    pub fn command(&mut self, command: Command) {
        match command {
            Command::TogglePause => {
                self.running = !self.running;
                info!(running = self.running, generation = self.sim.generation(), "toggled pause");
            }
            Command::StepOnce => {
                if !self.running {
                    self.advance();
                }
            }
            Command::Reseed => {
                let seed = rand::random();
                // Density was validated at startup
                if let Err(err) = self.sim.reseed(self.density, seed) {
                    error!(%err, "reseed failed");
                    return;
                }
                self.cycle_reported = false;
                info!(seed, "reseeded");
            }
            Command::Clear => {
                self.sim.clear();
                self.cycle_reported = false;
                info!("cleared grid");
            }
            Command::ApplyPattern => match self.pattern {
                Some(pattern) => {
                    self.sim.apply_pattern(pattern);
                    self.cycle_reported = false;
                    info!(pattern = pattern.name, "applied pattern");
                }
                None => warn!("no pattern configured"),
            },
        }
    }

    /// Flips a cell. Only allowed while paused.
    pub fn toggle_cell(&mut self, x: usize, y: usize) {
        if !self.running && self.sim.toggle(x, y) {
            // An edited grid may settle into a new cycle
            self.cycle_reported = false;
            debug!(x, y, alive = self.sim.grid().get(x, y), "toggled cell");
        }
    }

    fn advance(&mut self) {
        let step = match &self.scheduler {
            Some(scheduler) => match self.sim.step_rows(scheduler) {
                Ok(step) => step,
                Err(err) => {
                    error!(%err, "row-task step failed, pausing");
                    self.running = false;
                    return;
                }
            },
            None => self.sim.step(),
        };
        self.last_step = Some(step);

        if step.repeated && !self.cycle_reported {
            self.cycle_reported = true;
            info!(generation = step.generation, population = step.population, "grid settled into a cycle");
            if self.pause_on_cycle {
                self.running = false;
            }
        }
    }

    /// Releases the row-task runtime. Safe to call more than once.
    pub fn teardown(&mut self) {
        if let Some(scheduler) = self.scheduler.take() {
            scheduler.shutdown();
        }
        info!(
            generation = self.sim.generation(),
            population = self.sim.grid().population(),
            "shutting down"
        );
    }
}
