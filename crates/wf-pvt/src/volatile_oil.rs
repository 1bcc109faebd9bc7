//! Tabulated volatile-oil dataset and its bubble-point lookup.
//!
//! The table is supplied externally as an ordered 3-D grid
//! `[temperature-row][sample][field]` with field 0 = temperature [°C],
//! field 1 = pressure [Pa] and field 5 = solution gas-oil ratio [m³/m³].
//! Rows are sorted by ascending temperature; within a row the samples follow
//! the pressure history the table was built from, so the P–Rs curve increases
//! up to the bubble point and is flat above it.
//!
//! The lookup is a discrete two-level scan, not an interpolation: first the
//! row with the first tabulated temperature at or above the requested one
//! (clamped at both table ends), then the first sample at which Rs stops
//! increasing — the start of the saturation plateau.

use crate::error::{PvtError, PvtResult};

/// One tabulated sample of the volatile-oil dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PvtSample {
    /// Pressure [Pa]
    pub pressure_pa: f64,
    /// Solution gas-oil ratio [m³/m³]
    pub rs_m3m3: f64,
}

/// All samples tabulated at one temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureRow {
    /// Temperature [°C]
    pub temperature_c: f64,
    pub samples: Vec<PvtSample>,
}

/// Owned, immutable volatile-oil dataset, rows sorted ascending by temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct VolatileOilTable {
    rows: Vec<TemperatureRow>,
}

impl VolatileOilTable {
    /// Build a table, validating ordering and finiteness.
    pub fn new(rows: Vec<TemperatureRow>) -> PvtResult<Self> {
        if rows.is_empty() {
            return Err(PvtError::InvalidArg {
                what: "volatile-oil table must have at least one temperature row",
            });
        }
        for row in &rows {
            if row.samples.is_empty() {
                return Err(PvtError::InvalidArg {
                    what: "volatile-oil table row must have at least one sample",
                });
            }
            if !row.temperature_c.is_finite() {
                return Err(PvtError::InvalidArg {
                    what: "volatile-oil table temperature",
                });
            }
            for sample in &row.samples {
                if !sample.pressure_pa.is_finite() || !sample.rs_m3m3.is_finite() {
                    return Err(PvtError::InvalidArg {
                        what: "volatile-oil table sample",
                    });
                }
            }
        }
        if rows
            .windows(2)
            .any(|w| w[1].temperature_c <= w[0].temperature_c)
        {
            return Err(PvtError::InvalidArg {
                what: "volatile-oil table temperatures must be strictly ascending",
            });
        }
        Ok(Self { rows })
    }

    /// Build from the external grid layout `[row][sample][field]`.
    ///
    /// Field 0 = temperature [°C], field 1 = pressure [Pa],
    /// field 5 = solution gas-oil ratio [m³/m³]; the row temperature is read
    /// from the first sample of each row.
    pub fn from_grid(grid: &[Vec<[f64; 6]>]) -> PvtResult<Self> {
        let rows = grid
            .iter()
            .map(|row| {
                let temperature_c = row.first().map(|s| s[0]).unwrap_or(f64::NAN);
                TemperatureRow {
                    temperature_c,
                    samples: row
                        .iter()
                        .map(|s| PvtSample {
                            pressure_pa: s[1],
                            rs_m3m3: s[5],
                        })
                        .collect(),
                }
            })
            .collect();
        Self::new(rows)
    }

    pub fn rows(&self) -> &[TemperatureRow] {
        &self.rows
    }

    /// Bubble-point pressure [Pa] at the given temperature.
    ///
    /// Row selection clamps at the table bounds — no extrapolation. Within the
    /// row, the scan stops at the first sample whose Rs does not exceed the
    /// previous one; if Rs keeps increasing through the row, the last sample
    /// is reported.
    pub fn bubble_point(&self, t_c: f64) -> PvtResult<f64> {
        if !t_c.is_finite() {
            return Err(PvtError::InvalidArg {
                what: "temperature for volatile-oil lookup",
            });
        }

        let mut i = 0;
        while self.rows[i].temperature_c < t_c && i + 1 < self.rows.len() {
            i += 1;
        }

        let samples = &self.rows[i].samples;
        let mut j = 0;
        while j + 1 < samples.len() && samples[j + 1].rs_m3m3 > samples[j].rs_m3m3 {
            j += 1;
        }
        if j + 1 < samples.len() {
            // first sample of the plateau
            j += 1;
        }

        Ok(samples[j].pressure_pa)
    }

    /// Solution gas-oil ratio [m³/m³] at the given pressure and temperature.
    ///
    /// Row selection is the same clamped scan as [`Self::bubble_point`]; Rs is
    /// then piecewise-linear in pressure within the row, clamped at both
    /// pressure ends.
    pub fn solution_gor(&self, p_pa: f64, t_c: f64) -> PvtResult<f64> {
        if !p_pa.is_finite() || !t_c.is_finite() {
            return Err(PvtError::InvalidArg {
                what: "pressure/temperature for volatile-oil lookup",
            });
        }

        let mut i = 0;
        while self.rows[i].temperature_c < t_c && i + 1 < self.rows.len() {
            i += 1;
        }

        let samples = &self.rows[i].samples;
        if p_pa <= samples[0].pressure_pa {
            return Ok(samples[0].rs_m3m3);
        }
        for w in samples.windows(2) {
            if p_pa <= w[1].pressure_pa {
                let f = (p_pa - w[0].pressure_pa) / (w[1].pressure_pa - w[0].pressure_pa);
                return Ok(w[0].rs_m3m3 + f * (w[1].rs_m3m3 - w[0].rs_m3m3));
            }
        }
        Ok(samples[samples.len() - 1].rs_m3m3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(p: f64, rs: f64) -> PvtSample {
        PvtSample {
            pressure_pa: p,
            rs_m3m3: rs,
        }
    }

    fn test_table() -> VolatileOilTable {
        VolatileOilTable::new(vec![
            TemperatureRow {
                temperature_c: 40.0,
                samples: vec![
                    sample(5.0e6, 60.0),
                    sample(10.0e6, 110.0),
                    sample(15.0e6, 150.0),
                    sample(20.0e6, 150.0),
                    sample(25.0e6, 150.0),
                ],
            },
            TemperatureRow {
                temperature_c: 60.0,
                samples: vec![
                    sample(5.0e6, 50.0),
                    sample(10.0e6, 100.0),
                    sample(15.0e6, 150.0),
                    sample(20.0e6, 180.0),
                    sample(25.0e6, 180.0),
                    sample(30.0e6, 180.0),
                ],
            },
            TemperatureRow {
                temperature_c: 80.0,
                samples: vec![sample(8.0e6, 70.0), sample(16.0e6, 140.0)],
            },
        ])
        .unwrap()
    }

    #[test]
    fn plateau_start_is_reported() {
        let table = test_table();
        // Rs stops increasing at the 25 MPa sample of the 60 °C row.
        let p_b = table.bubble_point(60.0).unwrap();
        assert_eq!(p_b, 25.0e6);
    }

    #[test]
    fn temperature_rounds_up_to_next_row() {
        let table = test_table();
        // 45 °C selects the 60 °C row (first tabulated T >= requested).
        let p_b = table.bubble_point(45.0).unwrap();
        assert_eq!(p_b, 25.0e6);
    }

    #[test]
    fn temperature_clamps_at_both_ends() {
        let table = test_table();
        // Below the table: first row; its plateau starts at 20 MPa.
        assert_eq!(table.bubble_point(10.0).unwrap(), 20.0e6);
        // Above the table: last row; Rs increases through it, last sample wins.
        assert_eq!(table.bubble_point(120.0).unwrap(), 16.0e6);
    }

    #[test]
    fn strictly_increasing_row_reports_last_sample() {
        let table = VolatileOilTable::new(vec![TemperatureRow {
            temperature_c: 50.0,
            samples: vec![sample(1.0e6, 10.0), sample(2.0e6, 20.0), sample(3.0e6, 30.0)],
        }])
        .unwrap();
        assert_eq!(table.bubble_point(50.0).unwrap(), 3.0e6);
    }

    #[test]
    fn single_sample_row() {
        let table = VolatileOilTable::new(vec![TemperatureRow {
            temperature_c: 50.0,
            samples: vec![sample(7.0e6, 90.0)],
        }])
        .unwrap();
        assert_eq!(table.bubble_point(50.0).unwrap(), 7.0e6);
    }

    #[test]
    fn solution_gor_interpolates_and_clamps() {
        let table = test_table();
        // midway between the 10 and 15 MPa samples of the 60 °C row
        let rs = table.solution_gor(12.5e6, 60.0).unwrap();
        assert!((rs - 125.0).abs() < 1e-9, "rs = {rs}");
        // clamped below and above the tabulated pressures
        assert_eq!(table.solution_gor(1.0e6, 60.0).unwrap(), 50.0);
        assert_eq!(table.solution_gor(50.0e6, 60.0).unwrap(), 180.0);
    }

    #[test]
    fn from_grid_maps_fields() {
        // field 0 = T, field 1 = p, field 5 = Rs; fields 2..5 unused here
        let grid = vec![vec![
            [60.0, 5.0e6, 0.0, 0.0, 0.0, 50.0],
            [60.0, 10.0e6, 0.0, 0.0, 0.0, 100.0],
            [60.0, 15.0e6, 0.0, 0.0, 0.0, 100.0],
        ]];
        let table = VolatileOilTable::from_grid(&grid).unwrap();
        assert_eq!(table.bubble_point(60.0).unwrap(), 15.0e6);
    }

    #[test]
    fn rejects_unsorted_rows() {
        let err = VolatileOilTable::new(vec![
            TemperatureRow {
                temperature_c: 60.0,
                samples: vec![sample(1.0e6, 1.0)],
            },
            TemperatureRow {
                temperature_c: 40.0,
                samples: vec![sample(1.0e6, 1.0)],
            },
        ])
        .unwrap_err();
        assert!(matches!(err, PvtError::InvalidArg { .. }));
    }

    #[test]
    fn rejects_empty_table() {
        assert!(VolatileOilTable::new(vec![]).is_err());
    }
}
