//! Host-level tests driving the refresh cycle against a recording port.

use counter_display::{
    CELL_COUNT, CounterDisplay, DIGIT_DWELL_MICROS, DisplayPort, Leds, Result,
};
use embedded_hal::delay::DelayNs;

/// One observed transition on the display lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Call {
    Select { cell: usize, active: bool },
    Segments { mask: u8, decimal_point: bool },
}

#[derive(Default)]
struct RecordingPort {
    calls: Vec<Call>,
}

impl DisplayPort for RecordingPort {
    fn set_digit_select(&mut self, cell: usize, active: bool) -> Result<()> {
        self.calls.push(Call::Select { cell, active });
        Ok(())
    }

    fn set_segments(&mut self, mask: u8, decimal_point: bool) -> Result<()> {
        self.calls.push(Call::Segments {
            mask,
            decimal_point,
        });
        Ok(())
    }
}

#[derive(Default)]
struct TallyDelay {
    total_ns: u64,
}

impl DelayNs for TallyDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

const CYCLE_NS: u64 = CELL_COUNT as u64 * DIGIT_DWELL_MICROS as u64 * 1_000;

fn run_cycle(value: f32) -> (Vec<Call>, u64) {
    let mut port = RecordingPort::default();
    let mut delay = TallyDelay::default();
    CounterDisplay::new(&mut port, &mut delay)
        .render(value)
        .expect("cell indexes stay in range");
    (port.calls, delay.total_ns)
}

/// The cells that were actually lit, in lighting order.
fn lit_cells(calls: &[Call]) -> Vec<usize> {
    calls
        .iter()
        .filter_map(|call| match call {
            Call::Select { cell, active: true } => Some(*cell),
            _ => None,
        })
        .collect()
}

/// The non-blank segment patterns written, in order.
fn lit_segments(calls: &[Call]) -> Vec<(u8, bool)> {
    calls
        .iter()
        .filter_map(|call| match call {
            Call::Segments {
                mask,
                decimal_point,
            } if *mask != 0 => Some((*mask, *decimal_point)),
            _ => None,
        })
        .collect()
}

#[test]
fn positive_value_lights_cells_right_to_left() {
    let (calls, _) = run_cycle(12.3);
    assert_eq!(lit_cells(&calls), [3, 2, 1]);
    assert_eq!(
        lit_segments(&calls),
        [
            (Leds::DIGITS[3], false),
            (Leds::DIGITS[2], true),
            (Leds::DIGITS[1], false),
        ]
    );
}

#[test]
fn negative_value_places_the_sign_left_of_the_leading_digit() {
    let (calls, _) = run_cycle(-3.4);
    assert_eq!(lit_cells(&calls), [3, 2, 1]);
    assert_eq!(
        lit_segments(&calls),
        [
            (Leds::DIGITS[4], false),
            (Leds::DIGITS[3], true),
            (Leds::MINUS, false),
        ]
    );
}

#[test]
fn four_digit_value_fills_every_cell() {
    let (calls, _) = run_cycle(123.4);
    assert_eq!(lit_cells(&calls), [3, 2, 1, 0]);
}

#[test]
fn cycle_duration_is_constant_across_values() {
    // Short, full, negative, and blank cycles all take CELL_COUNT dwells;
    // anything else would make sparse values glow brighter.
    for value in [0.0, 5.0, -3.4, 123.4, 999.9, -99.9, 1000.0, -100.0] {
        let (_, total_ns) = run_cycle(value);
        assert_eq!(total_ns, CYCLE_NS, "cycle for {value} has the wrong length");
    }
}

#[test]
fn out_of_range_value_blanks_the_whole_cycle() {
    let (calls, total_ns) = run_cycle(1000.0);
    assert!(lit_cells(&calls).is_empty());
    assert!(lit_segments(&calls).is_empty());
    assert_eq!(total_ns, CYCLE_NS);
}

#[test]
fn every_lit_cell_follows_a_full_blank_and_fresh_segments() {
    // Before a select goes active all four cells must have been deselected
    // and the step's segments written - otherwise the pattern bleeds onto
    // the previously selected digit.
    let (calls, _) = run_cycle(-3.4);
    for (position, call) in calls.iter().enumerate() {
        if let Call::Select { active: true, .. } = call {
            let preceding = &calls[..position];
            let deselects = preceding
                .iter()
                .rev()
                .take_while(|recorded| !matches!(recorded, Call::Select { active: true, .. }))
                .filter(|recorded| matches!(recorded, Call::Select { active: false, .. }))
                .count();
            assert!(
                deselects >= CELL_COUNT,
                "cell lit without blanking the display first"
            );
            assert!(
                matches!(preceding.last(), Some(Call::Segments { .. })),
                "cell lit before its segment pattern was set"
            );
        }
    }
}

#[test]
fn rendering_the_same_value_twice_is_identical() {
    assert_eq!(run_cycle(12.3), run_cycle(12.3));
    assert_eq!(run_cycle(-99.9), run_cycle(-99.9));
}
