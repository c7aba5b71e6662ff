use std::{ env, fs };
use siegert::{ config::StudyConfig, states::Kind };

fn main() -> anyhow::Result<()> {
    let config: StudyConfig = match env::args().nth(1) {
        Some(path) => StudyConfig::load(path)?,
        None => StudyConfig::default(),
    };
    let outdir = config.output_dir.clone();
    fs::create_dir_all(&outdir)?;

    let siegerts = config.siegert_basis()?;
    for kind in [Kind::Bound, Kind::Antibound, Kind::Resonant, Kind::Antiresonant] {
        println!("{:?}: {}", kind, siegerts.filter(kind).len());
    }
    for s in siegerts.bounds().iter() {
        println!("  {:?} bound state at E = {:.6}", s.parity(), s.energy().re);
    }
    siegerts.write_json(outdir.join("siegert.json"))?;

    let continuum = config.continuum_basis()?;
    println!("continuum: {}", continuum.len());
    continuum.write_json(outdir.join("continuum.json"))?;

    if let Some(contour) = config.contour_basis()? {
        let berggren = (siegerts + contour)?;
        let enclosed = berggren.iter().filter(|s| berggren.is_enclosed(s)).count();
        println!("berggren: {} states, {} enclosed resonances", berggren.len(), enclosed);
        berggren.write_json(outdir.join("berggren.json"))?;
    }
    Ok(())
}
