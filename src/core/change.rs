//! Typisierter Änderungs-Deskriptor: jede Mutation meldet, was Konsumenten
//! minimal tun müssen (Handles anlegen vs. nur aktualisieren).

/// Ergebnis einer TrackModel-Mutation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TrackChange {
    /// Keine Änderung (z.B. unbekannte ID oder bereits aktiver Modus)
    #[default]
    None,
    /// Neue Punkte wurden angelegt: Konsumenten müssen Handles erstellen
    Structural {
        /// IDs der neu angelegten Punkte
        ids: Vec<u64>,
    },
    /// Nur Felder oder Selektion geändert: bestehende Handles aktualisieren,
    /// keine Neuerstellung nötig
    VisualOnly {
        /// IDs der betroffenen Punkte
        ids: Vec<u64>,
    },
}

impl TrackChange {
    /// Gibt `true` zurück, wenn die Mutation ein No-op war.
    pub fn is_none(&self) -> bool {
        matches!(self, TrackChange::None)
    }

    /// Gibt die betroffenen Punkt-IDs zurück (leer bei `None`).
    pub fn ids(&self) -> &[u64] {
        match self {
            TrackChange::None => &[],
            TrackChange::Structural { ids } | TrackChange::VisualOnly { ids } => ids,
        }
    }
}
