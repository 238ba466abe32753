use graphscan_core::{Coordinate2D, Observer, Real};

use crate::{
    BracketTest, Hone, Interest, ScanCursor,
    bracket::discontinuity,
    hone::Tolerance,
};

use super::{Action, Config, Event};

/// Core scan loop shared by every solver operation.
pub(super) fn scan<T, F, Obs>(
    cursor: ScanCursor<T>,
    f: &F,
    test: BracketTest,
    hone: Hone,
    config: &Config<T>,
    observer: &mut Obs,
) -> ScanCursor<T>
where
    T: Real,
    F: Fn(T) -> T,
    Obs: Observer<Event<T>, Action>,
{
    if cursor.is_exhausted() {
        return cursor;
    }

    let start = cursor.position();
    let end = cursor.end();
    let tolerance = Tolerance {
        precision: config.absolute_precision(),
        max_iters: config.brent_max_iters(),
    };

    let mut middle = sample(f, start);
    let mut last = sample(f, cursor.next_x(start, end));
    let mut samples = 2;

    while (start < last.x()) == (last.x() < end) && samples < config.max_samples() {
        let first = middle;
        middle = last;
        last = sample(f, cursor.next_x(middle.x(), end));
        samples += 1;

        match observer.observe(&Event::Sampled {
            bracket: [first, middle, last],
        }) {
            Some(Action::StopEarly) => return cursor.exhaust(),
            Some(Action::Ignore) => continue,
            None => {}
        }

        let mut bracket = [first, middle, last];
        let mut interest = test.classify(bracket[0], bracket[1], bracket[2]);
        if interest.is_none()
            && config.exclude_discontinuities()
            && !discontinuity(bracket[0], bracket[2]).is_none()
        {
            exclude_discontinuity(&mut bracket, f, config.max_exclusion_steps());
            interest = test.classify(bracket[0], bracket[1], bracket[2]);
        }
        if interest.is_none() {
            continue;
        }

        let point = hone.hone(f, bracket[0].x(), bracket[2].x(), interest, tolerance);
        let valid = point.x().is_finite() && cursor.is_valid_solution(point.x());
        match observer.observe(&Event::Honed {
            point,
            interest,
            valid,
        }) {
            Some(Action::StopEarly) => return cursor.exhaust(),
            Some(Action::Ignore) => continue,
            None => {}
        }

        if valid {
            return register(cursor, point, interest, f);
        }
    }

    cursor.exhaust()
}

fn sample<T: Real, F: Fn(T) -> T>(f: &F, x: T) -> Coordinate2D<T> {
    Coordinate2D::new(x, f(x))
}

/// Narrows a bracket whose ends straddle an undefined region onto its
/// defined side, and resamples its middle.
fn exclude_discontinuity<T, F>(bracket: &mut [Coordinate2D<T>; 3], f: &F, max_steps: usize)
where
    T: Real,
    F: Fn(T) -> T,
{
    let half = T::constant(0.5);
    let minimal = T::minimal_step(bracket[1].x());

    let [mut lower, mut middle, mut upper] = *bracket;
    for _ in 0..max_steps {
        if (upper.x() - lower.x()).abs() < minimal {
            break;
        }
        if discontinuity(lower, middle).is_none() {
            lower = middle;
        } else {
            upper = middle;
        }
        middle = sample(f, half * (lower.x() + upper.x()));
    }

    if lower.y().is_nan() {
        bracket[0] = upper;
    } else {
        bracket[2] = lower;
    }
    bracket[1] = sample(f, half * (bracket[0].x() + bracket[2].x()));
}

/// Turns a refined point into the returned cursor.
///
/// The abscissa moves to the nearest multiple of the minimal step if the
/// solution is at least as good there.
fn register<T, F>(
    cursor: ScanCursor<T>,
    point: Coordinate2D<T>,
    interest: Interest,
    f: &F,
) -> ScanCursor<T>
where
    T: Real,
    F: Fn(T) -> T,
{
    let scale = T::MINIMAL_STEP.recip();
    let rounded = (point.x() * scale).round() / scale;

    let mut solution = point;
    if rounded != point.x() && cursor.is_valid_solution(rounded) {
        let y = f(rounded);
        let better = match interest {
            Interest::Root => y == T::zero(),
            Interest::LocalMinimum => y < point.y(),
            Interest::LocalMaximum => y > point.y(),
            _ => false,
        };
        if better || y == point.y() {
            solution = Coordinate2D::new(rounded, y);
        }
    }

    cursor.found(solution.x(), solution.y(), interest)
}
