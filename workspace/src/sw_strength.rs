use std::{ env, fs };
use ndarray as nd;
use serde_json::json;
use siegert::{ config::StudyConfig, propagate::Expansion, strength };

fn main() -> anyhow::Result<()> {
    let config: StudyConfig = match env::args().nth(1) {
        Some(path) => StudyConfig::load(path)?,
        None => StudyConfig::default(),
    };
    let outdir = config.output_dir.clone();
    fs::create_dir_all(&outdir)?;
    let g = &config.test;
    let k: nd::Array1<f64> = config.strength.linspace();

    let siegerts = config.siegert_basis()?;
    let exact = strength::exact(&siegerts, g, &k)?;
    let mle = strength::mle(&siegerts, g, &k)?;
    let dev = exact.iter().zip(mle.iter())
        .map(|(e, m)| (e - m).abs())
        .fold(0.0_f64, f64::max);
    println!("max |S_exact - S_mle| = {:.3e}", dev);

    let mut results = json!({
        "k": k.to_vec(),
        "energy": k.mapv(|kk| kk * kk).to_vec(),
    });
    results[Expansion::Exact.name()] = json!(exact.to_vec());
    results[Expansion::Mle.name()] = json!(mle.to_vec());
    if let Some(contour) = config.contour_basis()? {
        let berggren = (siegerts + contour)?;
        results[Expansion::Berggren.name()]
            = json!(strength::berggren(&berggren, g, &k)?.to_vec());
    }

    fs::write(
        outdir.join("strength.json"),
        serde_json::to_string_pretty(&results)?,
    )?;
    Ok(())
}
