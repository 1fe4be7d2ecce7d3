use anyhow::Context;
use serde::Serialize;
use vaka_core::clock::Clock;
use vaka_core::entities::NewCase;
use vaka_core::enums::CaseStatus;
use vaka_core::responses::StatusCounts;
use vaka_store::CaseManager;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DemoArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DemoResponse {
    created: Vec<String>,
    counts: StatusCounts,
}

struct DemoCase {
    input: fn() -> NewCase,
    notes: &'static [&'static str],
    statuses: &'static [CaseStatus],
}

const DEMO_CASES: [DemoCase; 4] = [
    DemoCase {
        input: || {
            NewCase::new(
                "Aile içi şiddet vakası",
                "Mağdur, eşi tarafından tekrarlayan fiziksel şiddete maruz kaldığını bildirdi. Acil koruma talebi var.",
                "2026-01-10",
            )
            .location("Ankara, Çankaya")
            .evidence(["Tıbbi rapor", "Fotoğraflar", "Tanık ifadeleri (komşu)"])
        },
        notes: &["İlk görüşme yapıldı, koruma kararı alındı"],
        statuses: &[CaseStatus::UnderInvestigation],
    },
    DemoCase {
        input: || {
            NewCase::new(
                "İşyerinde taciz",
                "Çalışan, amiri tarafından sözlü tacize uğradığını ve iş ortamında rahatsız edildiğini bildirdi.",
                "2026-01-09",
            )
            .location("İstanbul, Beşiktaş")
            .evidence(["E-mail kayıtları", "Ses kayıtları", "İK şikayeti"])
        },
        notes: &["Şirket ile görüşme başlatıldı"],
        statuses: &[],
    },
    DemoCase {
        input: || {
            NewCase::new(
                "Siber zorbalık ve tehdit",
                "Mağdur, sosyal medya üzerinden tehdit mesajları ve özel bilgilerinin paylaşılması ile karşı karşıya.",
                "2026-01-08",
            )
            .location("İzmir, Konak")
            .evidence(["Ekran görüntüleri", "IP kayıtları", "Platform raporları"])
        },
        notes: &["Siber suçlar birimi bilgilendirildi"],
        statuses: &[CaseStatus::UnderInvestigation],
    },
    DemoCase {
        input: || {
            NewCase::new(
                "Takip ve rahatsız etme",
                "Mağdur, eski arkadaşı tarafından sürekli takip edildiğini bildirdi.",
                "2025-12-15",
            )
            .location("Antalya, Muratpaşa")
            .evidence(["Güvenlik kamerası görüntüleri", "SMS kayıtları"])
        },
        notes: &[
            "Takipçi tespit edildi",
            "Uzaklaştırma kararı alındı",
            "Mağdur güvenli ortamda",
        ],
        statuses: &[CaseStatus::UnderInvestigation, CaseStatus::Closed],
    },
];

/// Handle `vaka demo`.
pub fn handle(args: &DemoArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !ctx.manager.is_empty() && !args.force {
        anyhow::bail!(
            "{} already holds {} case(s); pass --force to add the demo cases anyway",
            ctx.data_path.display(),
            ctx.manager.len()
        );
    }

    let created = seed(&mut ctx.manager)?;
    if !flags.quiet {
        tracing::info!("Seeded {} demo cases", created.len());
    }
    output(
        &DemoResponse {
            created,
            counts: ctx.manager.status_counts(),
        },
        flags.format,
    )
}

/// Create the sample cases, walking each through its notes and statuses.
/// Returns the new identifiers in creation order.
pub fn seed<C: Clock>(manager: &mut CaseManager<C>) -> anyhow::Result<Vec<String>> {
    let mut created = Vec::with_capacity(DEMO_CASES.len());
    for demo in &DEMO_CASES {
        let id = manager.create_case((demo.input)()).id().to_string();
        for note in demo.notes {
            manager.add_update(&id, note);
        }
        for status in demo.statuses {
            manager
                .change_status(&id, *status)
                .with_context(|| format!("demo case {id} could not move to {status}"))?;
        }
        created.push(id);
    }
    Ok(created)
}
