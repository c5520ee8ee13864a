//! Statistics collection. Enabled with `--features stats`.
//!
//! Every rotation and every fixup case taken is counted in a thread local [`Stats`] object. The
//! thread local counters are merged into a global [`Stats`] object when the thread exits, or when
//! [`thread_flush`] is called.

use parking_lot::{Mutex, MutexGuard};
use std::{
    cell::RefCell,
    fmt::{self, Debug, Formatter},
    ops::Deref,
};

#[derive(Copy, Clone, Default, Debug)]
struct MinMaxTotal {
    min: u64,
    max: u64,
    total: u64,
}

#[doc(hidden)]
#[derive(Clone, Default)]
pub struct Size {
    min_max_total: Option<MinMaxTotal>,
    count: u64,
}

impl Debug for Size {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Size")
            .field("count", &self.count)
            .field("min", &self.min_max_total.map(|x| x.min))
            .field("max", &self.min_max_total.map(|x| x.max))
            .field("total", &self.min_max_total.map(|x| x.total))
            .field(
                "avg",
                &self
                    .min_max_total
                    .map(|x| x.total as f64 / self.count as f64),
            )
            .finish()
    }
}

impl Size {
    /// Number of recorded samples.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn min(&self) -> Option<u64> {
        self.min_max_total.map(|x| x.min)
    }

    pub fn max(&self) -> Option<u64> {
        self.min_max_total.map(|x| x.max)
    }

    /// Sum of all recorded samples.
    pub fn total(&self) -> u64 {
        self.min_max_total.unwrap_or_default().total
    }

    pub(crate) fn record(&mut self, size: u64) {
        self.count += 1;
        if let Some(min_max_total) = &mut self.min_max_total {
            min_max_total.min = min_max_total.min.min(size);
            min_max_total.max = min_max_total.max.max(size);
            min_max_total.total += size;
        } else {
            self.min_max_total = Some(MinMaxTotal {
                min: size,
                max: size,
                total: size,
            });
        }
    }

    pub(crate) fn merge(&mut self, rhs: &Self) {
        self.count += rhs.count;
        self.min_max_total = match (self.min_max_total, rhs.min_max_total) {
            (Some(a), Some(b)) => Some(MinMaxTotal {
                min: a.min.min(b.min),
                max: a.max.max(b.max),
                total: a.total + b.total,
            }),
            (a, b) => a.or(b),
        };
    }
}

#[doc(hidden)]
#[derive(Clone, Default, Debug)]
pub struct Event {
    count: u64,
}

impl Event {
    /// Number of times the event happened.
    pub fn count(&self) -> u64 {
        self.count
    }

    fn happened(&mut self) {
        self.count += 1
    }

    fn merge(&mut self, rhs: &Self) {
        self.count += rhs.count
    }
}

macro_rules! stats_func {
    ($(#[$attr:meta])* $name:ident: Event) => {
        #[inline]
        $(#[$attr])*
        pub(crate) fn $name() {
            if cfg!(feature = "stats") {
                let _ = THREAD_STAT.try_with(|stats| stats.borrow_mut().0.$name.happened());
            }
        }
    };
    ($(#[$attr:meta])* $name:ident: Size) => {
        #[inline]
        $(#[$attr])*
        pub(crate) fn $name(size: usize) {
            if cfg!(feature = "stats") {
                let size = size as u64;
                let _ = THREAD_STAT.try_with(|stats| stats.borrow_mut().0.$name.record(size));
            }
        }
    };
}

macro_rules! stats {
    ($($(#[$attr:meta])* $names:ident: $kinds:tt),* $(,)*) => {
        /// A collection of red-black tree statistics.
        #[derive(Clone, Default, Debug)]
        pub struct Stats {
            $($(#[$attr])* pub $names: $kinds),*
        }

        impl Stats {
            fn merge(&mut self, rhs: &Self) {
                $(self.$names.merge(&rhs.$names));*
            }
        }

        $(stats_func!{$(#[$attr])* $names: $kinds})*
    };
}

stats! {
    /// A left rotation.
    left_rotation: Event,

    /// A right rotation.
    right_rotation: Event,

    /// Insert fixup found a red uncle and pushed the violation two levels up.
    insert_recolor: Event,

    /// Insert fixup rotated an inner child to the outside of its parent.
    insert_inner_rotation: Event,

    /// Insert fixup recolored and rotated at the grandparent, ending the fixup.
    insert_outer_rotation: Event,

    /// Number of loop iterations per insert fixup.
    insert_fixup_iterations: Size,

    /// Delete fixup found a red sibling and rotated it above the parent.
    delete_red_sibling: Event,

    /// Delete fixup found a black sibling with two black children and moved the deficit up.
    delete_black_nephews: Event,

    /// Delete fixup found a red near nephew and a black far nephew.
    delete_near_nephew: Event,

    /// Delete fixup found a red far nephew, ending the fixup.
    delete_far_nephew: Event,

    /// Number of loop iterations per delete fixup. Only recorded when a black node was removed.
    delete_fixup_iterations: Size,
}

impl Stats {
    /// Total number of rotations.
    pub fn rotations(&self) -> u64 {
        self.left_rotation.count + self.right_rotation.count
    }

    /// Prints a summary of the stats object.
    pub fn print_summary(&self) {
        println!("{:#?}", self);

        let inserts = self.insert_fixup_iterations.count;
        let deletes = self.delete_fixup_iterations.count;
        println!(
            "{:>14}: {:>12} {:>14}: {:.4} {:>14}: {:.4}",
            "insert fixups",
            inserts,
            "iteration avg",
            self.insert_fixup_iterations.total() as f64 / inserts as f64,
            "recolor rate",
            self.insert_recolor.count as f64 / inserts as f64,
        );
        println!(
            "{:>14}: {:>12} {:>14}: {:.4} {:>14}: {:.4}",
            "delete fixups",
            deletes,
            "iteration avg",
            self.delete_fixup_iterations.total() as f64 / deletes as f64,
            "far rate",
            self.delete_far_nephew.count as f64 / deletes as f64,
        );
        println!("{:>14}: {:>12}", "rotations", self.rotations());
    }
}

/// Thread local statistics.
///
/// Flushed to the global `Stats` object on drop.
#[derive(Default)]
struct ThreadStats(Stats);

impl Drop for ThreadStats {
    fn drop(&mut self) {
        self.flush()
    }
}

impl ThreadStats {
    fn flush(&mut self) {
        GLOBAL.lock().merge(&self.0);
        self.0 = Default::default()
    }
}

thread_local! {
    static THREAD_STAT: RefCell<ThreadStats> = RefCell::default();
}

lazy_static::lazy_static! {
    static ref GLOBAL: Mutex<Stats> = Mutex::default();
}

/// Returns the global stats object, or None if the feature is disabled.
pub fn stats() -> Option<impl Deref<Target = Stats>> {
    if cfg!(feature = "stats") {
        let guard: MutexGuard<'static, Stats> = GLOBAL.lock();
        Some(guard)
    } else {
        None
    }
}

/// Returns a copy of this thread's unflushed stats, or None if the feature is disabled.
pub fn thread_stats() -> Option<Stats> {
    if cfg!(feature = "stats") {
        THREAD_STAT
            .try_with(|stats| stats.borrow().0.clone())
            .ok()
    } else {
        None
    }
}

/// Merges this thread's stats into the global stats object and resets them.
pub fn thread_flush() {
    if cfg!(feature = "stats") {
        let _ = THREAD_STAT.try_with(|stats| stats.borrow_mut().flush());
    }
}

/// Prints a summary of the global stats object.
///
/// It may be necessary to call [`thread_flush`] first.
pub fn print_stats() {
    match self::stats() {
        Some(stats) => stats.print_summary(),
        None => println!("`redblack/stats` feature is not enabled"),
    }
}
