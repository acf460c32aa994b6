// Test fixtures for integration testing

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scholarship regulation with a preamble, two chapters and numbered
/// lists in both inline and blank-line separated form
#[allow(dead_code)] // Used in integration tests
pub const STATUTE: &str = "REGLAMENTO DE BECAS DE LA UNIVERSIDAD

El presente reglamento establece las normas generales para la concesión de becas y ayudas al estudio.

CAPÍTULO I
Disposiciones generales

Artículo 1. Objeto.
Este reglamento regula el procedimiento de concesión de becas de matrícula para estudiantes de grado y máster.

Artículo 2. Requisitos.
Los solicitantes deberán cumplir los siguientes requisitos:
1) Estar matriculado en el curso académico vigente.
2) Tener una nota media igual o superior a siete.
3) No disfrutar de otra beca para la misma finalidad.

Artículo 3. Documentación.
La solicitud irá acompañada de la siguiente documentación:

1. Copia del documento de identidad.

2. Certificado académico oficial.

3. Declaración responsable de ingresos.

CAPÍTULO II
Procedimiento

Artículo 4. Plazo.
El plazo de presentación de solicitudes será de veinte días hábiles desde la publicación de la convocatoria.

Artículo 5. Resolución.
La comisión resolverá en el plazo máximo de tres meses. Contra la resolución podrá interponerse recurso de alzada ante el Rector.
";

/// Short report with headings and discourse markers
#[allow(dead_code)] // Used in integration tests
pub const ESSAY: &str = "Introducción

El cambio climático afecta a los ecosistemas de montaña de forma desigual. Los glaciares retroceden cada año y la vegetación asciende en altitud.

Metodología

Se analizaron datos de cuarenta estaciones meteorológicas entre 1990 y 2020. Las series se homogeneizaron antes del análisis. Sin embargo, algunas estaciones presentaban lagunas importantes en los registros.

Resultados

La temperatura media aumentó en todas las estaciones estudiadas. Por otro lado, la precipitación no mostró una tendencia clara en el periodo.
";

/// Mixed scripts, emoji and a long run without whitespace
#[allow(dead_code)] // Used in integration tests
pub const MULTILINGUAL: &str = "Résumé: les élèves étudient à Zürich. Ñandú y pingüino 🐧 en el zoológico.

日本語のテキストは空白なしで続きます。これは長い文の例です。分割されてはいけません。

Emoji run: 🚀🚀🚀🚀🚀🚀🚀🚀🚀🚀 🎉🎉🎉🎉🎉 done. Ελληνικά κείμενα εδώ. Русский текст тоже здесь.

Última línea con acentos: canción, corazón, pájaro.";

/// `paragraphs` paragraphs of plain prose without structure
#[allow(dead_code)] // Used in integration tests
pub fn prose(paragraphs: usize) -> String {
    (1..=paragraphs)
        .map(|n| {
            format!(
                "El párrafo número {n} describe el contexto del proyecto. \
                 Incluye detalles sobre los objetivos y el calendario previsto."
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Directory of input files for loader and CLI tests
#[allow(dead_code)] // Used in integration tests
pub struct TestCorpus {
    pub dir: TempDir,
    pub files: Vec<PathBuf>,
}

impl TestCorpus {
    /// A statute, an essay and a prose file
    #[allow(dead_code)] // Used in integration tests
    pub fn small() -> Self {
        let prose = prose(6);
        Self::with_files(&[
            ("reglamento.txt", STATUTE),
            ("informe.md", ESSAY),
            ("notas/acta.txt", prose.as_str()),
        ])
    }

    /// Create a corpus from (relative path, content) pairs
    #[allow(dead_code)] // Used in integration tests
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut paths = Vec::new();

        for (path, content) in files {
            let full_path = dir.path().join(path);
            if let Some(parent) = full_path.parent() {
                std::fs::create_dir_all(parent).expect("Failed to create directories");
            }
            std::fs::write(&full_path, content).expect("Failed to write file");
            paths.push(full_path);
        }

        Self { dir, files: paths }
    }

    #[allow(dead_code)] // Used in integration tests
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
