use super::Optimiser;
use crate::graph::Graph;
use crate::partition::{QualityFunction, VertexPartition};
use crate::{Error, ErrorKind};
use std::sync::Arc;

struct ProfileEntry {
    resolution: f64,
    partition: VertexPartition,
    bisect_value: f64,
}

impl Optimiser {
    /**
    Scans a resolution range by bisectioning, returning one optimised
    partition per detected plateau of the bisect value (the total weight
    inside communities), sorted by increasing resolution.

    Works for quality functions with a linear resolution parameter (CPM,
    RBConfiguration, RBER); the resolution stored in `quality_function` is
    ignored and replaced by the scanned values.

    Bisection is logarithmic while both ends of an interval are positive,
    unless `linear_bisection` is set. An interval is split further while
    its ends differ by more than `min_diff_bisect_value` (default 1, so a
    single edge of difference does not trigger a split) and by more than
    `min_diff_resolution` (default 1e-3). Because different runs are
    stochastic, a partition found at one resolution may beat the stored one
    at another; each scanned resolution keeps the best partition seen for
    it.

    # Arguments

    * `graph`: the graph to profile
    * `quality_function`: the resolution-parameterised variant to use
    * `resolution_range`: the `(low, high)` range to scan
    * `min_diff_bisect_value`: bisect-value plateau threshold, default 1
    * `min_diff_resolution`: resolution granularity, default 1e-3
    * `linear_bisection`: force linear rather than logarithmic bisection
    * `number_iterations`: optimisation iterations per resolution; 0 or
      negative keeps iterating until stable
    */
    #[allow(clippy::too_many_arguments)]
    pub fn resolution_profile(
        &mut self,
        graph: &Arc<Graph>,
        quality_function: QualityFunction,
        resolution_range: (f64, f64),
        min_diff_bisect_value: Option<f64>,
        min_diff_resolution: Option<f64>,
        linear_bisection: bool,
        number_iterations: i32,
    ) -> Result<Vec<VertexPartition>, Error> {
        if !quality_function.supports_resolution() {
            return Err(Error {
                kind: ErrorKind::InvalidConfig,
                message: format!(
                    "Bisectioning requires a linear resolution parameter; {:?} has none.",
                    quality_function
                ),
            });
        }
        let min_diff_bisect_value = min_diff_bisect_value.unwrap_or(1.0);
        let min_diff_resolution = min_diff_resolution.unwrap_or(1e-3);
        let mut entries: Vec<ProfileEntry> = vec![];
        let mut range_stack = vec![resolution_range];
        for &resolution in &[resolution_range.0, resolution_range.1] {
            let partition =
                self.find_for_profile(graph, quality_function, resolution, number_iterations)?;
            push_entry(&mut entries, resolution, partition);
        }
        while let Some((low, high)) = range_stack.pop() {
            let diff_bisect_value =
                (bisect_value_at(&entries, low) - bisect_value_at(&entries, high)).abs();
            let logarithmic = low > 0.0 && high > 0.0 && !linear_bisection;
            let diff_resolution = match logarithmic {
                true => (high / low).ln(),
                false => (high - low).abs(),
            };
            if diff_bisect_value <= min_diff_bisect_value || diff_resolution <= min_diff_resolution
            {
                continue;
            }
            let new_resolution = match logarithmic {
                true => (high * low).sqrt(),
                false => (low + high) / 2.0,
            };
            range_stack.push((low, new_resolution));
            range_stack.push((new_resolution, high));
            if entry_index(&entries, new_resolution).is_none() {
                let partition = self.find_for_profile(
                    graph,
                    quality_function,
                    new_resolution,
                    number_iterations,
                )?;
                push_entry(&mut entries, new_resolution, partition);
                ensure_monotonicity(&mut entries, new_resolution)?;
            }
        }
        clean_stepwise(&mut entries)?;
        entries.sort_by(|a, b| a.resolution.partial_cmp(&b.resolution).unwrap());
        Ok(entries.into_iter().map(|entry| entry.partition).collect())
    }

    /// Optimises a fresh singleton partition at the given resolution,
    /// iterating while the optimisation still improves it.
    fn find_for_profile(
        &mut self,
        graph: &Arc<Graph>,
        quality_function: QualityFunction,
        resolution: f64,
        number_iterations: i32,
    ) -> Result<VertexPartition, Error> {
        let mut partition =
            VertexPartition::new(graph, quality_function.with_resolution(resolution)?)?;
        let mut iteration = 0;
        loop {
            let diff = self.optimise_partition(&mut partition, 2, None)?;
            if diff > 0.0 && (iteration < number_iterations || number_iterations <= 0) {
                iteration += 1;
                continue;
            }
            break;
        }
        Ok(partition)
    }
}

fn push_entry(entries: &mut Vec<ProfileEntry>, resolution: f64, partition: VertexPartition) {
    let bisect_value = partition.bisect_value();
    entries.push(ProfileEntry {
        resolution,
        partition,
        bisect_value,
    });
}

fn entry_index(entries: &[ProfileEntry], resolution: f64) -> Option<usize> {
    entries.iter().position(|e| e.resolution == resolution)
}

fn bisect_value_at(entries: &[ProfileEntry], resolution: f64) -> f64 {
    entries[entry_index(entries, resolution).expect("resolution was scanned")].bisect_value
}

/// Optimisation is stochastic, so a partition found at one resolution may
/// beat the stored partition at another; keep the best partition seen for
/// every scanned resolution.
fn ensure_monotonicity(entries: &mut Vec<ProfileEntry>, new_resolution: f64) -> Result<(), Error> {
    let new_index = entry_index(entries, new_resolution).expect("entry was just pushed");
    for index in 0..entries.len() {
        if index == new_index {
            continue;
        }
        let resolution = entries[index].resolution;
        if entries[new_index].partition.quality_with_resolution(resolution)?
            > entries[index].partition.quality_with_resolution(resolution)?
        {
            entries[index] = ProfileEntry {
                resolution,
                partition: entries[new_index].partition.clone(),
                bisect_value: entries[new_index].bisect_value,
            };
        }
    }
    let mut best_index = new_index;
    for index in 0..entries.len() {
        if entries[index].partition.quality_with_resolution(new_resolution)?
            > entries[best_index].partition.quality_with_resolution(new_resolution)?
        {
            best_index = index;
        }
    }
    if best_index != new_index {
        entries[new_index] = ProfileEntry {
            resolution: new_resolution,
            partition: entries[best_index].partition.clone(),
            bisect_value: entries[best_index].bisect_value,
        };
    }
    Ok(())
}

/// Keeps, for each resolution, the best partition over the whole scan, then
/// drops resolutions whose bisect value repeats the previous one, leaving a
/// stepwise profile. Each kept partition is stamped with its resolution.
fn clean_stepwise(entries: &mut Vec<ProfileEntry>) -> Result<(), Error> {
    for index in 0..entries.len() {
        let resolution = entries[index].resolution;
        let mut best_index = index;
        let mut best_quality = entries[index].partition.quality_with_resolution(resolution)?;
        for other in 0..entries.len() {
            let quality = entries[other].partition.quality_with_resolution(resolution)?;
            if quality > best_quality {
                best_quality = quality;
                best_index = other;
            }
        }
        if best_index != index {
            entries[index] = ProfileEntry {
                resolution,
                partition: entries[best_index].partition.clone(),
                bisect_value: entries[best_index].bisect_value,
            };
        }
    }
    entries.sort_by(|a, b| a.resolution.partial_cmp(&b.resolution).unwrap());
    let mut keep = vec![true; entries.len()];
    for index in 1..entries.len() {
        if entries[index].bisect_value == entries[index - 1].bisect_value {
            keep[index] = false;
        }
    }
    let mut index = 0;
    entries.retain(|_| {
        let kept = keep[index];
        index += 1;
        kept
    });
    for entry in entries.iter_mut() {
        entry.partition.set_resolution_parameter(entry.resolution)?;
    }
    Ok(())
}
