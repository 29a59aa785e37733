mod args;
mod context;

use args::Args;
use context::Context;
use shipkit::content::Locator;
use shipkit::manifest::{self, DeploymentRecord, ProjectDescriptor};
use shipkit::packager::Packager;
use shipkit::result::Result;
use shipkit::tpl::Tpl;
use shipkit::utils;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let Args {
        verbose,
        project,
        output,
        manifest: manifest_override,
    } = Args::parse();

    let project = project.canonicalize()?;
    let ctx = Context::new(project, verbose);

    // Use cliclack for nice UI
    cliclack::intro("shipkit")?;

    // Resolve the manifest locator: an explicit override wins, otherwise try
    // the fixed candidate filenames. A project without a manifest is still
    // packageable, so absence is not an error.
    let locator = manifest_override.or_else(|| {
        manifest::find_manifest_file(&ctx.project_dir).map(|p| p.display().to_string())
    });

    let descriptor = match &locator {
        Some(locator) => {
            let spinner = cliclack::spinner();
            spinner.start("Loading manifest...");
            match load_descriptor(locator) {
                Ok(d) => {
                    spinner.stop(format!("Loaded manifest for {}", d.project.name));
                    Some(d)
                }
                Err(e) => {
                    spinner.error("Failed to load manifest");
                    return Err(e);
                }
            }
        }
        None => {
            if ctx.verbose {
                println!("No manifest found, using project directory defaults");
            }
            None
        }
    };

    // Project name and version come from the descriptor when present, else
    // from the directory itself.
    let name = descriptor
        .as_ref()
        .map(|d| d.project.name.clone())
        .or_else(|| {
            ctx.project_dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "project".to_string());

    let version = descriptor
        .as_ref()
        .and_then(|d| d.project.version.clone())
        .unwrap_or_else(|| "0.0.1".to_string());

    let mut tpl = Tpl::new();
    tpl.register("NAME", &name);
    tpl.register("VERSION", &version);
    let archive_filename = tpl.parse("$NAME-$VERSION.zip");

    let output_dir = output.unwrap_or_else(|| ctx.project_dir.join("deploy"));
    utils::ensure_dir(&output_dir)?;
    let archive_path = output_dir.join(&archive_filename);

    if ctx.verbose {
        println!(
            "Packaging {} into {}",
            ctx.project_dir.display(),
            archive_path.display()
        );
    }

    {
        let spinner = cliclack::spinner();
        spinner.start("Packaging project...");
        match Packager::new(&ctx.project_dir, &archive_path).pack() {
            Ok(()) => spinner.stop(format!("Archive created: {}", archive_path.display())),
            Err(e) => {
                spinner.error("Packaging failed");
                return Err(e);
            }
        }
    }

    if ctx.verbose {
        let mut annotations = descriptor
            .map(|d| d.project.annotations)
            .unwrap_or_default();
        manifest::delete_key(&mut annotations, "packaged-by");
        manifest::add_key_value(&mut annotations, "packaged-by", serde_json::json!("shipkit"));
        manifest::add_key_value(
            &mut annotations,
            "platform",
            serde_json::json!(std::env::consts::OS),
        );

        let record = DeploymentRecord {
            name,
            version,
            archive: archive_path,
            annotations,
        };
        println!("{}", utils::pretty_json(&record)?);
    }

    cliclack::outro("Project packaged successfully!")?;
    Ok(())
}

fn load_descriptor(locator: &str) -> Result<ProjectDescriptor> {
    let bytes = Locator::classify(locator).fetch()?;
    ProjectDescriptor::parse(&bytes)
}
