//! Scripted walk through every caster protocol.
//!
//! The transcript is returned rather than printed so it can be asserted on.

use anyhow::Context;
use grimoire_domain::{
    Caster, CasterFormat, DomainError, Field, FieldValue, ManaOp, SpellBook,
};

use crate::config::RunnerConfig;

/// Lines produced by [`run_demo`], one section header followed by entries.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    fn section(&mut self, title: &str) {
        tracing::info!(section = title, "Demo section");
        self.lines.push(format!("========== {} ==========", title));
    }

    fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    /// Record an error that the script expects to happen.
    fn rejected(&mut self, label: &str, result: Result<impl std::fmt::Debug, DomainError>) {
        match result {
            Ok(value) => self.line(format!("{}: unexpectedly accepted ({:?})", label, value)),
            Err(err) => self.line(format!("{}: rejected ({})", label, err)),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

fn sample_casters() -> anyhow::Result<(Caster, Caster)> {
    let aelar = Caster::new("Aelar", 5, 20)
        .context("creating Aelar")?
        .with_spells(SpellBook::from([
            ("fireball", 3),
            ("shield", 1),
            ("firebolt", 0),
        ]));
    let lyra = Caster::new("Lyra", 7, 30)
        .context("creating Lyra")?
        .with_spells(SpellBook::from([
            ("fireshield", 4),
            ("fireball", 3),
            ("haste", 3),
            ("firebolt", 0),
        ]));
    Ok((aelar, lyra))
}

/// Run the scripted demonstration.
pub fn run_demo(config: &RunnerConfig) -> anyhow::Result<Transcript> {
    let mut out = Transcript::default();
    let (mut aelar, lyra) = sample_casters()?;

    out.section("CASTERS");
    out.line(aelar.render(config.format));
    out.line(lyra.render(config.format));
    if config.emit_json {
        out.line(serde_json::to_string(&aelar).context("serializing Aelar")?);
        out.line(serde_json::to_string(&lyra).context("serializing Lyra")?);
    }

    out.section("STRING REPRESENTATIONS");
    out.line(format!("debug: {:?}", aelar));
    out.line(format!("friendly: {}", aelar));
    out.line(format!("short: {}", aelar.render(CasterFormat::Short)));
    out.line(format!("mana: {}", aelar.render(CasterFormat::Mana)));
    out.line(format!(
        "bytes: {}",
        String::from_utf8_lossy(&aelar.to_bytes())
    ));
    let decoded = Caster::from_bytes(&aelar.to_bytes()).context("decoding Aelar")?;
    out.line(format!("decoded equals original: {}", decoded == aelar));

    out.section("COMPARISON & HASHING");
    out.line(format!("aelar == lyra: {}", aelar == lyra));
    out.line(format!("aelar < lyra: {}", aelar.is_weaker_than(&lyra)));
    out.line(format!("aelar >= lyra: {}", aelar.is_at_least(&lyra)));
    out.line(format!("compare: {:?}", aelar.compare(&lyra)));
    out.rejected(
        "compare with a number",
        aelar.try_compare(&FieldValue::Int(5)),
    );

    out.section("CONTAINER & ITEM ACCESS");
    out.line(format!("fireball in aelar: {}", aelar.contains("fireball")));
    out.line(format!("lyra[fireball]: {}", lyra.get("fireball")?));
    aelar.set("misty_step", 2);
    out.line(format!("after learning misty_step: {:?}", aelar.known_spells()));
    aelar.delete("misty_step")?;
    out.line(format!("after forgetting misty_step: {:?}", aelar.known_spells()));
    out.rejected("aelar[misty_step]", aelar.get("misty_step"));

    out.section("ITERATION");
    for (spell, cost) in &lyra {
        out.line(format!("  spell: {} | cost: {}", spell, cost));
    }

    out.section("NUMERIC OPERATIONS");
    out.line(format!("aelar + 10: {:?}", aelar.add(10)?.mana()));
    out.line(format!("aelar * 2: {:?}", aelar.multiply(2)?.mana()));
    out.line(format!("lyra - 5: {:?}", lyra.subtract(5).mana()));
    out.line(format!("lyra / 2: {:?}", lyra.divide(2)?.mana()));
    out.line(format!("aelar unchanged: {}", aelar.mana()));
    out.rejected("aelar / 0", aelar.divide(0));
    out.rejected(
        "aelar + \"ten\"",
        aelar.apply(ManaOp::Add, &FieldValue::from("ten")),
    );

    out.section("CALLABLE (CASTING SPELLS)");
    out.line(aelar.invoke("firebolt", Some(config.target.as_str())).to_string());
    out.line(aelar.invoke("fireball", None).to_string());
    out.line(aelar.invoke("iceball", None).to_string());
    out.line(format!("aelar charged: {}", aelar.is_charged()));
    out.line(format!("aelar knows {} spells", aelar.len()));

    out.section("ATTRIBUTE ACCESS");
    out.line(format!("aelar.hp: {:?}", aelar.get_field("hp")?));
    out.line(format!("aelar.numSpells: {:?}", aelar.read(Field::NumSpells)));
    out.rejected("aelar.wisdom", aelar.get_field("wisdom"));
    out.rejected("aelar.mana = -1", aelar.set_field("mana", -1i64));
    out.rejected("del aelar.level", aelar.erase(Field::Level));

    tracing::info!(lines = out.lines().len(), "Demo finished");
    Ok(out)
}
