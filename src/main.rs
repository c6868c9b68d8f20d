use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use backprop_nn::presets::{Dataset, DatasetPreset, NetworkPreset};
use backprop_nn::{train_loop, NeuralNetwork, NetworkSpec, TrainConfig};

/// Trains a small feed-forward network on one of the built-in datasets.
///
/// The topology comes from `--network` or, when given, from a `--spec` JSON
/// file; `--spec` wins if both are present, and the preset then only
/// supplies the default epoch schedule.
#[derive(Parser, Debug)]
#[command(name = "backprop", version)]
struct Args {
    /// Dataset to train on: and, xor, class_example
    #[arg(short, long)]
    dataset: String,

    /// Network configuration: 1x1_net, 2x1_net, 2x2_net
    #[arg(short, long, required_unless_present = "spec")]
    network: Option<String>,

    /// JSON network spec used instead of a --network preset
    #[arg(long)]
    spec: Option<String>,

    /// Number of training epochs (gate datasets)
    #[arg(long)]
    epochs: Option<usize>,

    /// Record and log the loss every N epochs
    #[arg(long)]
    print_every: Option<usize>,
}

impl Args {
    /// Epoch schedule: the preset's, or 5000/500 without one, with any
    /// command-line overrides applied.
    fn train_config(&self, preset: Option<NetworkPreset>) -> Result<TrainConfig> {
        let base = preset.map_or(TrainConfig { epochs: 5000, print_every: 500 }, |p| p.train_config());
        let config = TrainConfig::new(
            self.epochs.unwrap_or(base.epochs),
            self.print_every.unwrap_or(base.print_every),
        )?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let preset: Option<NetworkPreset> = args.network.as_deref().map(str::parse).transpose()?;
    let dataset_preset: DatasetPreset = args.dataset.parse()?;
    let dataset = dataset_preset.dataset();

    let (spec, source) = match (&args.spec, preset) {
        (Some(path), _) => (NetworkSpec::load_json(path)?, path.clone()),
        (None, Some(preset)) => {
            let spec = preset.network_spec(&dataset)
                .with_context(|| format!("`{preset}` does not fit the `{dataset_preset}` dataset"))?;
            (spec, preset.to_string())
        }
        (None, None) => anyhow::bail!("either --network or --spec is required"),
    };
    let mut network = spec.build().context("failed to build the network")?;

    println!();
    println!("Training the `{source}` network on the `{dataset_preset}` dataset.");

    match dataset_preset {
        DatasetPreset::ClassExample => run_class_example(&mut network, &dataset),
        DatasetPreset::And | DatasetPreset::Xor => {
            let config = args.train_config(preset)?;
            run_gate(&mut network, &dataset, &config, dataset_preset)
        }
    }
}

fn run_gate(network: &mut NeuralNetwork, dataset: &Dataset, config: &TrainConfig, name: DatasetPreset) -> Result<()> {
    let report = train_loop(network, &dataset.inputs, &dataset.targets, config)?;
    println!("Epoch: {} Loss: {}", config.epochs, report.final_loss);

    println!("Predictions on the {name} dataset");
    for (input, target) in dataset.inputs.iter().zip(&dataset.targets) {
        let prediction = network.calculate(input)?;
        println!("True Output: {target:?} Prediction: {}", prediction[0]);
    }
    Ok(())
}

/// One hand-driven backpropagation step, printing every intermediate.
fn run_class_example(network: &mut NeuralNetwork, dataset: &Dataset) -> Result<()> {
    let input = &dataset.inputs[0];
    let target = &dataset.targets[0];

    println!("Pre-training Inputs:");
    println!("{input:?}");
    println!("Pre-training Weights:");
    print_weights(network);

    let pass = network.forward(input)?;
    let outputs = pass.output();
    println!("Outputs after calling `calculate()`:");
    println!("{outputs:?}");

    let seed = network.loss_derivative(&outputs, target)?;
    let wdeltas = network.backward(pass, seed)?;
    info!("loss after one step: {}", network.calculate_loss(&dataset.inputs, &dataset.targets)?);

    println!("Wdeltas after calling `calculate_wdeltas()`:");
    println!("{wdeltas:?}");
    println!("Weights after a single step of back-propagation:");
    print_weights(network);

    println!("Post-training Outputs:");
    println!("{:?}", network.calculate(input)?);
    Ok(())
}

/// Prints hidden neuron `i` next to output neuron `i`.
fn print_weights(network: &NeuralNetwork) {
    let layers = network.layers();
    let (Some(first), Some(last)) = (layers.first(), layers.last()) else {
        return;
    };
    for (i, (hidden, output)) in first.neurons().iter().zip(last.neurons()).enumerate() {
        println!("{:?} (h{}) x {:?} (O{})", hidden.weights(), i + 1, output.weights(), i + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_file_stands_in_for_the_network_preset() {
        let args = Args::try_parse_from(["backprop", "-d", "xor", "--spec", "net.json"]).unwrap();
        assert_eq!(args.network, None);
        assert_eq!(args.spec.as_deref(), Some("net.json"));
    }

    #[test]
    fn network_or_spec_is_required() {
        assert!(Args::try_parse_from(["backprop", "-d", "xor"]).is_err());
        assert!(Args::try_parse_from(["backprop", "-d", "xor", "-n", "2x1_net"]).is_ok());
    }

    #[test]
    fn epoch_schedule_defaults_and_overrides() {
        let args = Args::try_parse_from(["backprop", "-d", "and", "--spec", "net.json"]).unwrap();
        assert_eq!(args.train_config(None).unwrap(), TrainConfig { epochs: 5000, print_every: 500 });

        let args = Args::try_parse_from(["backprop", "-d", "and", "-n", "2x2_net", "--epochs", "20"]).unwrap();
        let preset = Some(NetworkPreset::TwoByTwo);
        assert_eq!(args.train_config(preset).unwrap(), TrainConfig { epochs: 20, print_every: 100 });

        let args = Args::try_parse_from(["backprop", "-d", "and", "-n", "1x1_net", "--print-every", "0"]).unwrap();
        assert!(args.train_config(None).is_err());
    }
}
