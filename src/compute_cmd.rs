//! The `spi` and `spei` subcommands: load observations, run the index
//! engine per scale, write the index CSV and optional diagnostics JSON.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use caeli_index::{DistributionFamily, compute_index};
use caeli_io::{MonthlyInput, read_monthly_csv, write_monthly_csv};

use crate::cli::ComputeArgs;
use crate::config::{CaeliConfig, build_index_config};
use crate::report::{DiagnosticsReport, ScaleReport};

/// Run the SPI pipeline on the input's precipitation column.
pub fn run_spi(args: ComputeArgs) -> Result<()> {
    let _cmd = info_span!("spi").entered();
    let (input, config) = load(&args)?;

    let values = input.precip().to_vec();
    compute_and_write(
        "spi",
        &values,
        &input,
        DistributionFamily::GammaZeroInflated,
        &args,
        &config,
    )
}

/// Run the SPEI pipeline on the water balance (precipitation − PET).
pub fn run_spei(args: ComputeArgs) -> Result<()> {
    let _cmd = info_span!("spei").entered();
    let (input, config) = load(&args)?;

    let Some(values) = input.water_balance() else {
        bail!("input file has no 'pet' column (required for spei)");
    };
    compute_and_write(
        "spei",
        &values,
        &input,
        DistributionFamily::LogLogistic,
        &args,
        &config,
    )
}

/// Load the TOML config and the observation CSV.
fn load(args: &ComputeArgs) -> Result<(MonthlyInput, CaeliConfig)> {
    let config = CaeliConfig::load(args.config.as_deref())?;

    let input_path = args
        .input
        .clone()
        .or_else(|| config.io.input.clone())
        .context("no input path: set [io].input in config or use --input")?;

    info!(path = %input_path.display(), "reading observations");
    let input = read_monthly_csv(&input_path)
        .with_context(|| format!("failed to read CSV: {}", input_path.display()))?;
    info!(n_periods = input.len(), "observations loaded");

    Ok((input, config))
}

fn compute_and_write(
    name: &str,
    values: &[f64],
    input: &MonthlyInput,
    family: DistributionFamily,
    args: &ComputeArgs,
    config: &CaeliConfig,
) -> Result<()> {
    let scales = args
        .scales
        .clone()
        .unwrap_or_else(|| config.index.scales.clone());
    if scales.is_empty() {
        bail!("no accumulation scales configured");
    }

    let mut columns = Vec::with_capacity(scales.len());
    let mut reports = Vec::with_capacity(scales.len());

    for &scale in &scales {
        let index_config = build_index_config(&config.index, scale, family);
        let result = compute_index(values, input.months(), &index_config)
            .with_context(|| format!("{name} computation failed at scale {scale}"))?;

        for skipped in result.skipped() {
            warn!(scale, period = skipped.period, reason = ?skipped.reason, "calendar group skipped");
        }
        info!(scale, n_fitted = result.n_fitted(), "scale computed");

        reports.push(ScaleReport::from_result(scale, &result));
        columns.push((format!("{name}_{scale}"), result.into_values()));
    }

    let output_path = output_path(name, args, config);
    write_monthly_csv(&output_path, input.years(), input.months(), &columns)
        .with_context(|| format!("failed to write CSV: {}", output_path.display()))?;
    info!(path = %output_path.display(), "index series written");

    if let Some(diag_path) = &args.diagnostics {
        let report = DiagnosticsReport {
            index: name.to_string(),
            scales: reports,
        };
        let json =
            serde_json::to_string_pretty(&report).context("failed to serialize diagnostics")?;
        std::fs::write(diag_path, json)
            .with_context(|| format!("failed to write diagnostics: {}", diag_path.display()))?;
        info!(path = %diag_path.display(), "diagnostics written");
    }

    Ok(())
}

/// Resolve the output path: flag, then config, then derived from the input.
fn output_path(name: &str, args: &ComputeArgs, config: &CaeliConfig) -> PathBuf {
    args.output
        .clone()
        .or_else(|| config.io.output.clone())
        .unwrap_or_else(|| {
            // Auto-derive: obs.csv -> obs.spi.csv
            let input = args
                .input
                .clone()
                .or_else(|| config.io.input.clone())
                .unwrap_or_else(|| PathBuf::from("caeli"));
            input.with_extension(format!("{name}.csv"))
        })
}
