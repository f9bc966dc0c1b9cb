//! Übergabe von Hit-Test-Ergebnissen vom Input-/Render-Thread an den
//! Logik-Thread.
//!
//! Hit-Tests laufen im Backend-Kontext; Mutationen am TrackModel sind von
//! dort aus nicht erlaubt. Der Input-Thread postet Ergebnisse in die Queue,
//! der Logik-Thread leert sie und führt erst dort die Tap-Commands aus.
//! Das ist der einzige Thread-Übergang des Kerns.

use std::sync::mpsc;

/// Sende-Seite der Hit-Queue; lebt auf dem Input-/Render-Thread.
#[derive(Clone)]
pub struct HitSender {
    tx: mpsc::Sender<Option<u64>>,
}

impl HitSender {
    /// Postet ein Hit-Test-Ergebnis (`None` = nichts getroffen).
    ///
    /// Ist der Logik-Thread bereits beendet, wird das Ergebnis verworfen.
    pub fn send(&self, hit: Option<u64>) {
        if self.tx.send(hit).is_err() {
            log::warn!("HitSender: Logik-Seite nicht mehr erreichbar, Hit verworfen");
        }
    }
}

/// Empfangs-Seite der Hit-Queue; lebt auf dem Logik-Thread.
pub struct HitQueue {
    rx: mpsc::Receiver<Option<u64>>,
}

impl HitQueue {
    /// Leert die Queue ohne zu blockieren und gibt alle anstehenden
    /// Hit-Ergebnisse in Eingangsreihenfolge zurück.
    pub fn drain(&self) -> Vec<Option<u64>> {
        self.rx.try_iter().collect()
    }
}

/// Erstellt ein verbundenes Sender/Queue-Paar.
pub fn hit_channel() -> (HitSender, HitQueue) {
    let (tx, rx) = mpsc::channel();
    (HitSender { tx }, HitQueue { rx })
}
