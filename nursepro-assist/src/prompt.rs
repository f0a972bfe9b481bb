//! Prompt templates and response schemas sent to the model.

use serde_json::{json, Value};

use crate::{AssistError, ImageKind, SbarNote};

/// Upload ceiling for clinical images (4 MiB).
pub const MAX_IMAGE_BYTES: usize = 4 * 1024 * 1024;

pub const DEFAULT_QUIZ_COUNT: usize = 5;

/// Warning every image interpretation must end with, verbatim.
pub const DISCLAIMER: &str = "**PENTING: Analisis ini dihasilkan oleh AI dan hanya bersifat \
sebagai referensi pendukung (Decision Support). Hasil ini bukan merupakan diagnosis final. \
Segera konsultasikan hasil ini dengan dokter spesialis jantung (Kardiolog) atau dokter \
penanggung jawab pasien sebelum mengambil tindakan medis.**";

pub const QUIZ_DOCUMENT_PROMPT: &str = "Ekstrak semua pertanyaan pilihan ganda tentang \
keperawatan dari dokumen ini. Ambil pertanyaan, 4 pilihan jawaban, indeks jawaban yang benar \
(0-3), dan penjelasan singkat mengapa jawaban tersebut benar. Jika dokumen tidak memiliki \
format soal, buatlah 5 soal berdasarkan materi di dokumen tersebut. Gunakan Bahasa Indonesia.";

const EKG_PROTOCOL: &str = "\
Anda adalah Asisten AI Medis yang terspesialisasi dalam interpretasi Elektrokardiogram (EKG). \
Berikan analisis awal yang terstruktur dari gambar EKG untuk staf perawat.

IKUTI PROTOKOL ANALISIS INI:
1. **Kualitas Gambar**: nilai kejelasan grid dan gelombang. Jika buram, minta foto yang lebih jelas.
2. **Laju & Irama**: perkirakan denyut jantung (BPM) dan keteraturan irama.
3. **Morfologi Gelombang**:
   - Gelombang P: ada/tidak ada, rasio terhadap QRS.
   - Interval PR: normal (0.12-0.20s) atau memanjang.
   - Kompleks QRS: sempit (<0.12s) atau lebar.
   - Segmen ST: isoelektrik, elevasi, atau depresi.
   - Gelombang T: normal, terbalik, atau runcing.
4. **Interpretasi Awal**: sebutkan ritme yang paling mungkin.

GAYA KOMUNIKASI:
- Terminologi klinis profesional.
- Ringkas dan terstruktur dengan poin-poin.
- Balas dalam Bahasa Indonesia.";

const AGD_PROTOCOL: &str = "\
Anda adalah asisten AI medis spesialis perawatan kritis. Analisis gambar hasil Analisa Gas \
Darah (AGD) ini. Berikan interpretasi sistematis dalam format MARKDOWN:

- **pH**: (nilai)
- **PaCO2**: (nilai)
- **HCO3**: (nilai)
- **PaO2**: (nilai)
- **Base Excess (BE)**: (nilai)
- **Interpretasi Akhir**: kesimpulan gangguan asam-basa dan status kompensasinya.

Gunakan terminologi klinis profesional dan balas dalam Bahasa Indonesia.";

/// Instruction text for interpreting a clinical image.
pub fn image_prompt(kind: ImageKind) -> String {
    let protocol = match kind {
        ImageKind::Ekg => EKG_PROTOCOL,
        ImageKind::Agd => AGD_PROTOCOL,
    };
    format!(
        "{protocol}\n\nDi akhir setiap analisis, Anda WAJIB menyertakan peringatan penting \
         berikut dalam format tebal persis seperti ini:\n{DISCLAIMER}"
    )
}

/// Check an upload before it is sent for interpretation.
pub fn validate_image(mime_type: &str, size: usize) -> Result<(), AssistError> {
    if size == 0 {
        return Err(AssistError::EmptyImage);
    }
    if size > MAX_IMAGE_BYTES {
        return Err(AssistError::ImageTooLarge {
            size,
            limit: MAX_IMAGE_BYTES,
        });
    }
    if !mime_type.trim().to_ascii_lowercase().starts_with("image/") {
        return Err(AssistError::UnsupportedMime(mime_type.to_string()));
    }
    Ok(())
}

pub fn askep_prompt(patient_data: &str) -> String {
    format!(
        "Analyze the following patient data and generate the appropriate Indonesian Nursing \
         Diagnoses (SDKI).\nPatient Data: \"{}\"\n\nRules:\n\
         - Return a list of possible SDKI diagnoses.\n\
         - Each diagnosis must follow the SDKI format: Problem (Masalah), Etiology (Penyebab), \
         and Signs/Symptoms (Tanda dan Gejala).\n\
         - Language: Indonesian.",
        patient_data.trim()
    )
}

pub fn sbar_prompt(note: &SbarNote) -> String {
    format!(
        "Rapikan data operan perawat berikut menjadi bahasa medis yang profesional dan ringkas \
         (format SBAR).\nSituation: {}\nBackground: {}\nAssessment: {}\nRecommendation: {}\n\n\
         Gunakan istilah medis yang tepat dalam Bahasa Indonesia.",
        note.situation, note.background, note.assessment, note.recommendation
    )
}

pub fn quiz_topic_prompt(topic: &str, count: usize) -> String {
    let count = if count == 0 { DEFAULT_QUIZ_COUNT } else { count };
    format!(
        "Create {count} high-quality nursing practice questions about \"{}\" in Indonesian. \
         Include options, correct answer index, and a brief explanation.",
        topic.trim()
    )
}

fn string_array() -> Value {
    json!({ "type": "ARRAY", "items": { "type": "STRING" } })
}

/// Response schema for [`askep_prompt`].
pub fn askep_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "code": { "type": "STRING" },
                "name": { "type": "STRING" },
                "category": { "type": "STRING" },
                "definition": { "type": "STRING" },
                "causes": string_array(),
                "signs": {
                    "type": "OBJECT",
                    "properties": {
                        "major": string_array(),
                        "minor": string_array()
                    },
                    "required": ["major", "minor"]
                }
            },
            "required": ["code", "name", "category", "definition", "causes", "signs"],
            "propertyOrdering": ["code", "name", "category", "definition", "causes", "signs"]
        }
    })
}

/// Response schema for [`sbar_prompt`].
pub fn sbar_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "situation": { "type": "STRING" },
            "background": { "type": "STRING" },
            "assessment": { "type": "STRING" },
            "recommendation": { "type": "STRING" }
        },
        "required": ["situation", "background", "assessment", "recommendation"]
    })
}

/// Response schema shared by topic and document quizzes.
pub fn quiz_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "INTEGER" },
                "question": { "type": "STRING" },
                "options": string_array(),
                "correctAnswer": { "type": "INTEGER" },
                "explanation": { "type": "STRING" }
            },
            "required": ["id", "question", "options", "correctAnswer", "explanation"]
        }
    })
}
