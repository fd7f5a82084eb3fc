use rayon::prelude::*;
use tracing::debug;

use crate::foundation::core::FrameSize;
use crate::foundation::error::{MockupError, MockupResult};
use crate::screens::Screen;
use crate::text::FontSet;
use crate::theme::Theme;

/// One screen to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchJob {
    pub screen: Screen,
    pub size: FrameSize,
    /// `None` uses [`Screen::default_seed`].
    pub seed: Option<u64>,
}

impl BatchJob {
    pub fn new(screen: Screen, size: FrameSize) -> Self {
        Self {
            screen,
            size,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn run(&self, theme: &Theme, fonts: &FontSet) -> MockupResult<Rendered> {
        let seed = self.seed.unwrap_or_else(|| self.screen.default_seed());
        let image = self.screen.render_seeded(self.size, seed, theme, fonts)?;
        Ok(Rendered { job: *self, image })
    }
}

/// Threading options for [`render_batch`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchOpts {
    /// Render screens concurrently on a dedicated rayon pool.
    pub parallel: bool,
    /// Override the number of worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

/// A finished job and its flattened image.
#[derive(Clone, Debug)]
pub struct Rendered {
    pub job: BatchJob,
    pub image: image::RgbImage,
}

/// Render every job, returning results in job order.
///
/// Screens share nothing mutable, so the parallel path produces exactly the same bytes as the
/// sequential one. The first failing job aborts the batch.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(jobs = jobs.len(), parallel = opts.parallel)
)]
pub fn render_batch(
    jobs: &[BatchJob],
    theme: &Theme,
    fonts: &FontSet,
    opts: BatchOpts,
) -> MockupResult<Vec<Rendered>> {
    if !opts.parallel {
        return jobs.iter().map(|job| job.run(theme, fonts)).collect();
    }

    let pool = build_thread_pool(opts.threads)?;
    debug!(threads = pool.current_num_threads(), "rendering batch in parallel");
    pool.install(|| {
        jobs.par_iter()
            .map(|job| job.run(theme, fonts))
            .collect::<MockupResult<Vec<_>>>()
    })
}

fn build_thread_pool(threads: Option<usize>) -> MockupResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(MockupError::validation(
            "batch 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| MockupError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/screens/batch.rs"]
mod tests;
