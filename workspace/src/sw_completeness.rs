use std::{ env, fs };
use ndarray as nd;
use num_complex::Complex64 as C64;
use serde_json::{ json, Value };
use siegert::{ basis::BasisSet, config::StudyConfig, testfn::TestFunction };

fn pairs(z: impl IntoIterator<Item = C64>) -> Vec<(f64, f64)> {
    z.into_iter().map(|zk| (zk.re, zk.im)).collect()
}

fn entry(
    value: C64,
    (k, sums): (nd::Array1<f64>, nd::Array1<C64>),
) -> Value {
    json!({
        "value": (value.re, value.im),
        "k": k.to_vec(),
        "partial_sums": pairs(sums),
    })
}

fn main() -> anyhow::Result<()> {
    let config: StudyConfig = match env::args().nth(1) {
        Some(path) => StudyConfig::load(path)?,
        None => StudyConfig::default(),
    };
    let outdir = config.output_dir.clone();
    fs::create_dir_all(&outdir)?;
    let g = &config.test;
    println!("<g|g> = {:.12}", g.norm2());

    let siegerts = config.siegert_basis()?;
    let exact: BasisSet = (siegerts.bounds() + config.continuum_basis()?)?;
    let exact_c = exact.exact_completeness(g);
    println!("exact:    {:.12}", exact_c);
    let mle_c = siegerts.mle_completeness(g);
    println!("mle:      {:.12}", mle_c);

    let mut results = json!({
        "norm2": g.norm2(),
        "exact": entry(exact_c, exact.exact_completeness_convergence(g)),
        "mle": entry(mle_c, siegerts.mle_completeness_convergence(g)),
    });
    if let Some(contour) = config.contour_basis()? {
        let berggren = (siegerts + contour)?;
        let berggren_c = berggren.berggren_completeness(g);
        println!("berggren: {:.12}", berggren_c);
        results["berggren"]
            = entry(berggren_c, berggren.berggren_completeness_convergence(g));
    }

    fs::write(
        outdir.join("completeness.json"),
        serde_json::to_string_pretty(&results)?,
    )?;
    Ok(())
}
