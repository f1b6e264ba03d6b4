// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Domain synonym dictionary and query-term expansion.
//!
//! A plain one-directional map from a normalized keyword to normalized related
//! keywords. Lookups hit the exact key only: no prefix lookup, no transitive
//! closure. Pairs that should bridge both ways ("riego" ↔ "agua") list each
//! other explicitly; plenty of entries are deliberately asymmetric.
//!
//! The dictionary is a value, not a global. The engine receives one at
//! construction, so tests and callers can swap in their own vocabulary.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::utils::normalize;

/// Built-in vocabulary for Chilean agricultural funding: irrigation, soils,
/// institution acronyms, beneficiary profiles and thematic tags.
///
/// Stored pre-normalized (lowercase, no diacritics).
const BUILTIN_SYNONYMS: &[(&str, &[&str])] = &[
    // Water and irrigation
    ("riego", &["irrigacion", "agua", "goteo", "aspersion", "tecnificado", "hidrico", "canal", "embalse"]),
    ("irrigacion", &["riego", "agua", "goteo", "aspersion"]),
    ("agua", &["riego", "hidrico", "pozo", "embalse", "acumulador"]),
    ("goteo", &["riego", "microriego", "tecnificado"]),
    ("aspersion", &["riego", "pivote", "tecnificado"]),
    ("sequia", &["emergencia", "deficit hidrico", "escasez hidrica", "agua"]),
    ("regantes", &["organizaciones de usuarios de agua", "comunidad de aguas", "junta de vigilancia"]),
    // Soils
    ("suelo", &["suelos", "sirsd", "degradado", "fertilizacion", "conservacion"]),
    ("suelos", &["suelo", "sirsd", "degradados", "fertilizacion", "enmiendas"]),
    ("fertilizacion", &["fertilizante", "abono", "enmiendas", "suelos"]),
    ("sirsd", &["suelos degradados", "suelos", "incentivo"]),
    // Institutions
    ("cnr", &["comision nacional de riego", "ley de riego"]),
    ("indap", &["instituto de desarrollo agropecuario", "pequeno productor", "agricultura familiar campesina", "afc"]),
    ("corfo", &["corporacion de fomento", "emprendimiento", "innovacion"]),
    ("fia", &["fundacion para la innovacion agraria", "innovacion"]),
    ("sag", &["servicio agricola y ganadero", "sanidad", "fitosanitario"]),
    ("conaf", &["corporacion nacional forestal", "forestal", "bosque"]),
    ("sercotec", &["servicio de cooperacion tecnica", "emprendimiento", "pyme"]),
    // Instruments
    ("credito", &["prestamo", "financiamiento", "capital de trabajo"]),
    ("financiamiento", &["credito", "subsidio", "bono", "cofinanciamiento", "fondo"]),
    ("subsidio", &["bono", "bonificacion", "incentivo", "subvencion", "financiamiento"]),
    ("bono", &["subsidio", "bonificacion", "incentivo"]),
    ("concurso", &["convocatoria", "llamado", "postulacion"]),
    ("convocatoria", &["concurso", "llamado", "postulacion"]),
    // Beneficiaries
    ("pequeno", &["pequeno productor", "afc", "campesino", "indap"]),
    ("productor", &["agricultor", "campesino", "productores"]),
    ("agricultor", &["productor", "campesino", "agricultora"]),
    ("mujer", &["mujeres", "mujer rural", "prodemu", "genero"]),
    ("joven", &["jovenes", "juventud", "rural joven"]),
    ("indigena", &["pueblos originarios", "mapuche", "conadi"]),
    ("empresa", &["pyme", "empresas", "emprendimiento"]),
    ("cooperativa", &["asociatividad", "organizacion", "cooperativas"]),
    ("asociatividad", &["cooperativa", "asociacion", "organizacion"]),
    // Themes
    ("emergencia", &["sequia", "catastrofe", "incendio", "helada", "inundacion"]),
    ("innovacion", &["fia", "tecnologia", "investigacion", "desarrollo"]),
    ("ganaderia", &["ganado", "bovino", "ovino", "praderas", "ganadero"]),
    ("pradera", &["praderas", "forraje", "pastoreo"]),
    ("forestal", &["bosque", "conaf", "plantacion", "reforestacion"]),
    ("energia", &["solar", "fotovoltaico", "paneles", "energia renovable", "ernc"]),
    ("solar", &["fotovoltaico", "paneles solares", "energia"]),
    ("inversion", &["equipamiento", "maquinaria", "infraestructura", "capital"]),
    ("maquinaria", &["tractor", "equipamiento", "implementos"]),
    ("exportacion", &["exportar", "comercio exterior", "prochile", "mercado internacional"]),
    ("comercializacion", &["ventas", "mercado", "canales de venta"]),
    ("turismo", &["agroturismo", "turismo rural"]),
    ("apicultura", &["abejas", "miel", "apicola"]),
    ("organico", &["organica", "agroecologia", "sustentable"]),
    ("sustentabilidad", &["sustentable", "medio ambiente", "cambio climatico", "agroecologia"]),
    ("capacitacion", &["formacion", "asesoria", "asistencia tecnica", "transferencia"]),
    ("asesoria", &["asistencia tecnica", "consultoria", "capacitacion", "sat"]),
];

/// Normalized keyword → related normalized keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynonymDictionary {
    entries: BTreeMap<String, Vec<String>>,
}

impl SynonymDictionary {
    /// Empty dictionary: every term expands to itself only.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in agricultural vocabulary.
    pub fn builtin() -> Self {
        Self::from_entries(
            BUILTIN_SYNONYMS
                .iter()
                .map(|(key, values)| (*key, values.iter().copied())),
        )
    }

    /// Build from arbitrary `(key, values)` pairs. Keys and values are
    /// normalized; a key appearing twice keeps its last value list.
    pub fn from_entries<I, K, V, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        for (key, values) in entries {
            dictionary.insert(key, values);
        }
        dictionary
    }

    /// Insert or replace one entry. Empty keys are ignored.
    pub fn insert<K, V, S>(&mut self, key: K, values: V)
    where
        K: AsRef<str>,
        V: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let key = normalize(key.as_ref());
        if key.is_empty() {
            return;
        }
        let values = values
            .into_iter()
            .map(|v| normalize(v.as_ref()))
            .filter(|v| !v.is_empty())
            .collect();
        self.entries.insert(key, values);
    }

    /// Overlay `other` on top of `self`. Keys present in both take `other`'s values.
    pub fn merge(&mut self, other: SynonymDictionary) {
        self.entries.extend(other.entries);
    }

    /// Values for an exact (already normalized) key.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Expand a term to itself plus its synonyms, all normalized.
    ///
    /// The normalized term always comes first. Unknown terms expand to just
    /// themselves. Duplicates in the dictionary are passed through.
    pub fn expand(&self, term: &str) -> Vec<String> {
        let normalized = normalize(term);
        let synonyms = self.get(&normalized).unwrap_or(&[]);

        let mut expanded = Vec::with_capacity(1 + synonyms.len());
        expanded.push(normalized);
        expanded.extend(synonyms.iter().cloned());
        expanded
    }

    /// Parse a JSON object of `"key": ["value", ...]`.
    pub fn from_json_str(content: &str, origin: &Path) -> Result<Self> {
        let raw: BTreeMap<String, Vec<String>> =
            serde_json::from_str(content).map_err(|source| Error::Json {
                path: origin.to_path_buf(),
                source,
            })?;
        Ok(Self::from_entries(raw))
    }

    /// Parse a TOML table of `key = ["value", ...]`.
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        let raw: BTreeMap<String, Vec<String>> =
            toml::from_str(content).map_err(|source| Error::Toml {
                path: origin.to_path_buf(),
                source,
            })?;
        Ok(Self::from_entries(raw))
    }

    /// Load a dictionary file, picking the format from its extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let dictionary = match extension.as_deref() {
            Some("json") => Self::from_json_str(&content, path)?,
            Some("toml") => Self::from_toml_str(&content, path)?,
            _ => {
                return Err(Error::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        debug!(path = %path.display(), entries = dictionary.len(), "loaded synonym dictionary");
        Ok(dictionary)
    }
}
