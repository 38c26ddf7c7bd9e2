//! Demo: video sintético → audio → transcripción → palabras, con linaje y
//! extracción de features en cada etapa.
use serde_json::to_string_pretty;

use stim_adapters::{image_summary, RecognizedWord, ServiceError, SpeechRecognizer, StftExtractor,
                    VideoToAudioConverter, WitTranscriptionConverter};
use stimflow_rust::{extract, AudioStim, CapabilityRegistry, ComplexTextIterator, Converter, CoreError, ImageStim,
                    RegistryBuilder, Stimulus, StimulusKind, VideoStim, CONFIG};

/// Reconocedor fijo para la demo (no hay servicio real configurado).
#[derive(Debug)]
struct DemoRecognizer;

impl SpeechRecognizer for DemoRecognizer {
    fn recognize(&self, _audio: &AudioStim) -> Result<Vec<RecognizedWord>, ServiceError> {
        Ok(vec![RecognizedWord::timed("we", 0.10, 0.20),
                RecognizedWord::timed("obey", 0.35, 0.30),
                RecognizedWord::timed("the", 0.70, 0.10),
                RecognizedWord::timed("laws", 0.85, 0.25)])
    }
}

fn demo_video() -> Result<Stimulus, CoreError> {
    let rate = 8_000;
    let tone: Vec<f32> = (0..rate * 2).map(|i| (i as f32 * 440.0 * std::f32::consts::TAU / rate as f32).sin() * 0.5)
                                      .collect();
    let frames = (0..48u8).map(|i| ImageStim::filled(8, 8, [i * 5, 120, 255 - i * 5]))
                          .collect::<Result<Vec<_>, _>>()?;
    let video = VideoStim::new(24.0, frames)?.with_audio(AudioStim::new(tone, rate as u32)?)
                                             .with_name("demo.mp4");
    Ok(Stimulus::from(video).with_onset(4.2)?)
}

fn main() -> Result<(), CoreError> {
    // Cargar variables de entorno desde .env si existe
    let _ = dotenvy::dotenv();
    println!("[config] stft={:?} policy={}", CONFIG.stft, CONFIG.collection_policy);

    let global = CapabilityRegistry::global();
    println!("[registry] {} capacidades registradas", global.len());
    for d in global.descriptors() {
        println!("  - {:<32} {:<10} {:?} -> {:?}", d.name(), d.role().to_string(), d.inputs(), d.output());
    }

    // Registro explícito con un backend de transcripción de demo
    let registry = RegistryBuilder::new().register_converter(VideoToAudioConverter::new())
                                         .register_converter(WitTranscriptionConverter::new().with_backend(DemoRecognizer))
                                         .build();

    let video = demo_video()?;
    let transcript = registry.resolver().convert(&video, StimulusKind::Text)?;
    for stim in &transcript {
        println!("[lineage] {}", stim.history_string().unwrap_or_default());
    }

    // desglose explícito en palabras
    let iterator = ComplexTextIterator::new();
    let words = transcript.try_flat_map(|s| iterator.transform(s))?;
    for w in &words {
        println!("[word] {:>5} onset={:?} history={}",
                 w.as_text().map(|t| t.text()).unwrap_or_default(),
                 w.onset(),
                 w.history_string().unwrap_or_default());
    }

    let audio = registry.resolver().convert(&video, StimulusKind::Audio)?;
    let stft = StftExtractor::default();
    for result in stimflow_rust::apply_converted(&stft, &audio)? {
        println!("[stft] {} filas x {} bandas, fingerprint={}",
                 result.n_rows(),
                 result.features().len(),
                 result.fingerprint());
    }

    if let Some(frame) = video.as_video().and_then(|v| v.frames().first()) {
        let frame = Stimulus::from(frame.clone());
        for result in image_summary().extract_all(&frame)? {
            println!("[image] {}", to_string_pretty(&result).unwrap_or_default());
        }
    }

    // Registro global: los transcriptores registrados no tienen backend
    match extract("length", &video) {
        Ok(results) => println!("[length] {} resultados", results.len()),
        Err(err) => println!("[length] error esperado sin backend: {err}"),
    }
    Ok(())
}
