use std::{ env, fs };
use ndarray as nd;
use num_complex::Complex64 as C64;
use serde_json::json;
use siegert::{
    basis::BasisSet,
    config::StudyConfig,
    propagate::{ self, Expansion },
};

fn main() -> anyhow::Result<()> {
    let config: StudyConfig = match env::args().nth(1) {
        Some(path) => StudyConfig::load(path)?,
        None => StudyConfig::default(),
    };
    let outdir = config.output_dir.clone();
    fs::create_dir_all(&outdir)?;
    let g = &config.test;
    let t: nd::Array1<f64> = config.time.linspace();
    let x: nd::Array1<f64> = config.space.linspace();

    let siegerts = config.siegert_basis()?;
    let mut bases: Vec<(Expansion, BasisSet)> = vec![
        (Expansion::Exact, (siegerts.bounds() + config.continuum_basis()?)?),
        (Expansion::Mle, siegerts.clone()),
    ];
    if let Some(contour) = config.contour_basis()? {
        bases.push((Expansion::Berggren, (siegerts + contour)?));
    }

    let mut results = json!({ "t": t.to_vec(), "x": x.to_vec() });
    for (expansion, basis) in bases.iter() {
        let psi: nd::Array2<C64>
            = propagate::propagate(*expansion, basis, g, &t, &x)?;
        let prob: Vec<Vec<f64>>
            = psi.outer_iter()
            .map(|row| row.iter().map(|q| q.norm_sqr()).collect())
            .collect();
        let acorr: Vec<(f64, f64)>
            = propagate::autocorrelation(*expansion, basis, g, &t)?
            .iter()
            .map(|a| (a.re, a.im))
            .collect();
        println!(
            "{}: |A(t_max)|² = {:.6e}",
            expansion.name(),
            acorr.last().map(|(re, im)| re * re + im * im).unwrap_or(0.0),
        );
        results[expansion.name()] = json!({
            "prob": prob,
            "autocorrelation": acorr,
        });
    }

    fs::write(
        outdir.join("propagation.json"),
        serde_json::to_string_pretty(&results)?,
    )?;
    Ok(())
}
