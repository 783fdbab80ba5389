//! Plain-text and tabular reports built from stored diaries.

use crate::auth::SessionUser;
use crate::config::ReportConfig;
use crate::records::Diary;
use crate::time::{format_duration, ClockTime};
use crate::types::Role;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

const NA: &str = "N/A";
const RULE_WIDTH: usize = 100;

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Inclusive date range. Only applied when both ends are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl ReportPeriod {
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.start?, self.end?))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match self.bounds() {
            Some((start, end)) => start <= date && date <= end,
            None => true,
        }
    }
}

fn diary_cluster_id(diary: &Diary) -> &str {
    diary
        .plant
        .as_ref()
        .map(|p| p.cluster_id.as_str())
        .filter(|id| !id.is_empty())
        .unwrap_or(&diary.cluster_id)
}

/// Diaries the viewer may include in a report, oldest first.
///
/// Admins see every cluster; everyone else is limited to their own cluster
/// when they have one.
pub fn select_diaries<'a>(
    diaries: &'a [Diary],
    period: &ReportPeriod,
    viewer: Option<&SessionUser>,
) -> Vec<&'a Diary> {
    let cluster_scope = viewer
        .filter(|u| u.role != Role::Admin)
        .and_then(|u| u.cluster_id.as_deref());

    let mut selected: Vec<&Diary> = diaries
        .iter()
        .filter(|d| period.contains(d.date))
        .filter(|d| cluster_scope.map_or(true, |c| diary_cluster_id(d) == c))
        .collect();
    selected.sort_by_key(|d| d.date);
    selected
}

// ---------------------------------------------------------------------------
// Daily text report
// ---------------------------------------------------------------------------

fn role_label(role: Option<Role>) -> &'static str {
    role.map(Role::label).unwrap_or(NA)
}

/// The text block a team shares for one diary entry.
pub fn daily_report_text(diary: &Diary, cfg: &ReportConfig) -> String {
    let cluster = diary
        .cluster_name()
        .unwrap_or(&cfg.fallback_cluster_name);
    let plant = diary.plant_name().unwrap_or(NA);

    let mut text = String::new();
    text.push_str(&format!(
        "📅 Informe Diário – Programação de Equipe - {cluster}\n"
    ));
    text.push_str(&format!("📆 Data: {}\n", diary.date.format("%d/%m/%Y")));
    text.push('\n');
    text.push_str("👥 Equipes em Campo:\n\n");

    if diary.participants.is_empty() {
        let name = diary.user.as_ref().map(|u| u.name.as_str()).unwrap_or(NA);
        let role = role_label(diary.user.as_ref().map(|u| u.role));
        text.push_str(&format!("{name} – {cluster} – {role} – {name}\n"));
    } else {
        for p in &diary.participants {
            let name = &p.user.name;
            text.push_str(&format!(
                "{name} – {cluster} – {} – {name}\n",
                p.user.role.label()
            ));
        }
    }

    for ext in &diary.external_people {
        let person = &ext.external_person;
        let role = person.role.as_deref().unwrap_or("Externo");
        let company = person
            .company
            .as_deref()
            .map(|c| format!(" ({c})"))
            .unwrap_or_default();
        text.push_str(&format!(
            "{name} – {cluster} – {role}{company} – {name}\n",
            name = person.name
        ));
    }

    text.push_str("\n\n🔧 Manutenções Programadas:\n\n");
    if diary.activities.is_empty() {
        text.push_str("Nenhuma atividade programada\n");
    } else {
        for a in &diary.activities {
            let equipment = non_empty_or_na(&a.equipment);
            let activity = non_empty_or_na(&a.activity);
            text.push_str(&format!(
                "Usina: {plant} – Equipamento: {equipment} – Horário: [{} às {}] – Atividade: [{activity}]",
                a.start_time, a.end_time
            ));
            if let Some(ss) = a.ss_number.as_deref().filter(|s| !s.is_empty()) {
                text.push_str(&format!(" - SS: [{ss}]"));
            }
            text.push('\n');
        }
    }

    text.push_str("\n📌 Observações Importantes:\n\n");
    match diary
        .general_observations
        .as_deref()
        .filter(|s| !s.is_empty())
    {
        Some(obs) => text.push_str(&format!("[{obs}]\n\n")),
        None => text.push_str("[Nenhuma observação especial]\n\n"),
    }

    text.push_str(&format!("📲 Contato do Líder: {}\n", cfg.leader_contact));
    text.push_str(&format!(
        "📲 Contato do Coordenador: {}\n",
        cfg.coordinator_contact
    ));
    text
}

fn non_empty_or_na(s: &str) -> &str {
    if s.is_empty() {
        NA
    } else {
        s
    }
}

fn period_line(period: &ReportPeriod) -> String {
    match period.bounds() {
        Some((start, end)) => format!(
            "Período: {} a {}\n",
            start.format("%d/%m/%Y"),
            end.format("%d/%m/%Y")
        ),
        None => "Período: Todos os registros disponíveis\n".to_string(),
    }
}

/// Every selected diary's daily report under a summary header.
pub fn complete_report_text(
    diaries: &[&Diary],
    period: &ReportPeriod,
    cfg: &ReportConfig,
) -> String {
    let mut text = String::from("RELATÓRIO COMPLETO - TODOS OS DIÁRIOS\n");
    text.push_str(&period_line(period));
    text.push_str(&format!("Total de diários: {}\n\n", diaries.len()));
    text.push_str(&"=".repeat(RULE_WIDTH));
    text.push_str("\n\n");
    for diary in diaries {
        text.push_str(&daily_report_text(diary, cfg));
        text.push('\n');
    }
    text
}

/// Daily reports grouped by cluster name, clusters in alphabetical order.
pub fn cluster_report_text(
    diaries: &[&Diary],
    period: &ReportPeriod,
    cfg: &ReportConfig,
) -> String {
    let mut groups: BTreeMap<&str, Vec<&Diary>> = BTreeMap::new();
    for diary in diaries {
        let name = diary
            .cluster_name()
            .unwrap_or(&cfg.fallback_cluster_name);
        groups.entry(name).or_default().push(diary);
    }

    let mut text = String::from("RELATÓRIO - CLUSTERS SELECIONADOS\n");
    text.push_str(&period_line(period));
    let names: Vec<&str> = groups.keys().copied().collect();
    text.push_str(&format!("Clusters: {}\n", names.join(", ")));
    text.push_str(&format!("Total de diários: {}\n\n", diaries.len()));
    text.push_str(&"=".repeat(RULE_WIDTH));
    text.push_str("\n\n");

    for (index, group) in groups.values().enumerate() {
        if index > 0 {
            text.push_str(&"=".repeat(55));
            text.push_str("\n\n");
        }
        for diary in group {
            text.push_str(&daily_report_text(diary, cfg));
            text.push('\n');
        }
    }
    text
}

// ---------------------------------------------------------------------------
// SS and hours reports
// ---------------------------------------------------------------------------

/// Service-ticket numbers referenced per plant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SsReport {
    pub cluster_name: String,
    pub plant_name: String,
    pub ss_count: usize,
    pub ss_list: Vec<String>,
}

pub fn ss_report(diaries: &[&Diary], cfg: &ReportConfig) -> Vec<SsReport> {
    let mut groups: BTreeMap<(String, String), BTreeSet<String>> = BTreeMap::new();
    for diary in diaries {
        let key = (
            diary
                .cluster_name()
                .unwrap_or(&cfg.fallback_cluster_name)
                .to_string(),
            diary.plant_name().unwrap_or(NA).to_string(),
        );
        let tickets = diary
            .activities
            .iter()
            .filter_map(|a| a.ss_number.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        groups.entry(key).or_default().extend(tickets);
    }

    groups
        .into_iter()
        .filter(|(_, list)| !list.is_empty())
        .map(|((cluster_name, plant_name), list)| SsReport {
            cluster_name,
            plant_name,
            ss_count: list.len(),
            ss_list: list.into_iter().collect(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityHours {
    pub equipment: String,
    pub activity: String,
    pub minutes: u32,
    pub hours: String,
}

/// Worked time per day and cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoursReport {
    pub date: NaiveDate,
    pub cluster_name: String,
    pub total_minutes: u32,
    pub total_hours: String,
    pub activities: Vec<ActivityHours>,
}

pub fn hours_report(diaries: &[&Diary], cfg: &ReportConfig) -> Vec<HoursReport> {
    let mut groups: BTreeMap<(NaiveDate, String), Vec<ActivityHours>> = BTreeMap::new();
    for diary in diaries {
        let cluster = diary
            .cluster_name()
            .unwrap_or(&cfg.fallback_cluster_name)
            .to_string();
        let rows = groups.entry((diary.date, cluster)).or_default();
        for a in &diary.activities {
            let minutes = a.duration_minutes();
            rows.push(ActivityHours {
                equipment: a.equipment.clone(),
                activity: a.activity.clone(),
                minutes,
                hours: format_duration(minutes),
            });
        }
    }

    groups
        .into_iter()
        .map(|((date, cluster_name), activities)| {
            let total_minutes = activities.iter().map(|a| a.minutes).sum();
            HoursReport {
                date,
                cluster_name,
                total_minutes,
                total_hours: format_duration(total_minutes),
                activities,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Search and calendar
// ---------------------------------------------------------------------------

fn matches_term(diary: &Diary, term: &str) -> bool {
    let hit = |s: &str| s.to_lowercase().contains(term);
    diary.activities.iter().any(|a| {
        hit(&a.activity) || hit(&a.equipment) || a.ss_number.as_deref().is_some_and(hit)
    }) || diary.plant_name().is_some_and(hit)
}

/// Diaries whose activities, equipment, SS numbers or plant name contain
/// `term` (case-insensitive), optionally limited to one day. An empty term
/// matches everything.
pub fn search_diaries<'a>(
    diaries: &[&'a Diary],
    term: &str,
    date: Option<NaiveDate>,
) -> Vec<&'a Diary> {
    let term = term.trim().to_lowercase();
    diaries
        .iter()
        .copied()
        .filter(|d| term.is_empty() || matches_term(d, &term))
        .filter(|d| date.map_or(true, |day| d.date == day))
        .collect()
}

const DEFAULT_EVENT_START: u16 = 8 * 60;
const DEFAULT_EVENT_END: u16 = 17 * 60;
const DEFAULT_EVENT_TITLE: &str = "Diário";

/// One diary placed on a calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

fn at(date: NaiveDate, time: ClockTime) -> NaiveDateTime {
    NaiveDateTime::from(date) + chrono::Duration::minutes(i64::from(time.minutes()))
}

fn joined<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts.filter(|s| !s.is_empty()).collect::<Vec<_>>().join(", ")
}

/// Calendar entry for a diary: from the first activity's start to the last
/// activity's end, titled `equipment - activities`. Diaries without
/// activities span 08:00 to 17:00.
pub fn calendar_event(diary: &Diary) -> CalendarEvent {
    let (title, start, end) = match (diary.activities.first(), diary.activities.last()) {
        (Some(first), Some(last)) => (
            format!(
                "{} - {}",
                joined(diary.activities.iter().map(|a| a.equipment.as_str())),
                joined(diary.activities.iter().map(|a| a.activity.as_str()))
            ),
            first.start_time,
            last.end_time,
        ),
        _ => (
            DEFAULT_EVENT_TITLE.to_string(),
            ClockTime::from_minutes(DEFAULT_EVENT_START).unwrap_or_default(),
            ClockTime::from_minutes(DEFAULT_EVENT_END).unwrap_or_default(),
        ),
    };
    CalendarEvent {
        id: diary.id.clone(),
        title,
        start: at(diary.date, start),
        end: at(diary.date, end),
    }
}

pub fn calendar_events(diaries: &[&Diary]) -> Vec<CalendarEvent> {
    diaries.iter().map(|d| calendar_event(d)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{
        Cluster, DiaryActivity, DiaryExternalPerson, DiaryParticipant, ExternalPerson, Plant, User,
    };
    use crate::types::{DiaryStatus, ParticipantRole};

    fn user(name: &str, role: Role, cluster: &str) -> User {
        User {
            id: format!("u-{name}"),
            email: String::new(),
            name: name.into(),
            role,
            cluster_id: Some(cluster.into()),
            available: true,
            created_at: None,
            updated_at: None,
        }
    }

    fn activity(equipment: &str, start: &str, end: &str, ss: Option<&str>) -> DiaryActivity {
        DiaryActivity {
            id: String::new(),
            diary_id: String::new(),
            equipment: equipment.into(),
            activity: "Inspeção".into(),
            start_time: start.parse().unwrap(),
            end_time: end.parse().unwrap(),
            ss_number: ss.map(str::to_string),
            observations: None,
        }
    }

    fn diary(id: &str, date: &str, cluster: (&str, &str), plant: &str) -> Diary {
        Diary {
            id: id.into(),
            user_id: "u1".into(),
            cluster_id: cluster.0.into(),
            plant_id: format!("p-{plant}"),
            date: date.parse().unwrap(),
            status: DiaryStatus::Pending,
            general_observations: None,
            observations: None,
            created_at: None,
            updated_at: None,
            plant: Some(Plant {
                id: format!("p-{plant}"),
                name: plant.into(),
                cluster_id: cluster.0.into(),
                location: None,
                cluster: Some(Cluster {
                    id: cluster.0.into(),
                    name: cluster.1.into(),
                    description: None,
                }),
            }),
            user: Some(user("Carla", Role::Maintainer, cluster.0)),
            activities: vec![],
            participants: vec![],
            external_people: vec![],
        }
    }

    fn cfg() -> ReportConfig {
        ReportConfig {
            leader_contact: "Líder Teste".into(),
            coordinator_contact: "Coordenação Teste".into(),
            ..ReportConfig::default()
        }
    }

    #[test]
    fn daily_report_uses_author_without_participants() {
        let mut d = diary("d1", "2024-05-10", ("c1", "Cluster Norte"), "UFV Alfa");
        d.activities.push(activity("Inversor 1", "08:00", "09:30", Some("SS-42")));
        let text = daily_report_text(&d, &cfg());

        assert!(text.starts_with("📅 Informe Diário – Programação de Equipe - Cluster Norte\n"));
        assert!(text.contains("📆 Data: 10/05/2024"));
        assert!(text.contains("Carla – Cluster Norte – Mantenedor – Carla\n"));
        assert!(text.contains(
            "Usina: UFV Alfa – Equipamento: Inversor 1 – Horário: [08:00 às 09:30] – Atividade: [Inspeção] - SS: [SS-42]\n"
        ));
        assert!(text.contains("[Nenhuma observação especial]"));
        assert!(text.ends_with("📲 Contato do Coordenador: Coordenação Teste\n"));
    }

    #[test]
    fn daily_report_lists_participants_and_externals() {
        let mut d = diary("d1", "2024-05-10", ("c1", "Cluster Norte"), "UFV Alfa");
        d.participants = vec![
            DiaryParticipant {
                user: user("Bruno", Role::Technician, "c1"),
                role: ParticipantRole::Creator,
            },
            DiaryParticipant {
                user: user("Dora", Role::ClusterManager, "c1"),
                role: ParticipantRole::Participant,
            },
        ];
        d.external_people = vec![DiaryExternalPerson {
            external_person: ExternalPerson {
                id: "e1".into(),
                name: "Edu".into(),
                role: None,
                contact: None,
                company: Some("WEG".into()),
            },
        }];
        d.general_observations = Some("Chuva à tarde".into());

        let text = daily_report_text(&d, &cfg());
        assert!(text.contains("Bruno – Cluster Norte – Técnico Eletrotécnico – Bruno\n"));
        assert!(text.contains("Dora – Cluster Norte – Gerente de Cluster – Dora\n"));
        assert!(!text.contains("Carla"));
        assert!(text.contains("Edu – Cluster Norte – Externo (WEG) – Edu\n"));
        assert!(text.contains("Nenhuma atividade programada"));
        assert!(text.contains("[Chuva à tarde]"));
    }

    #[test]
    fn missing_relations_fall_back() {
        let mut d = diary("d1", "2024-05-10", ("c1", "x"), "y");
        d.plant = None;
        d.user = None;
        let text = daily_report_text(&d, &cfg());
        assert!(text.contains("Cluster não especificado"));
        assert!(text.contains("N/A – Cluster não especificado – N/A – N/A"));
    }

    #[test]
    fn selection_scopes_by_cluster_and_period() {
        let diaries = vec![
            diary("d2", "2024-05-12", ("c1", "Norte"), "A"),
            diary("d1", "2024-05-10", ("c1", "Norte"), "A"),
            diary("d3", "2024-05-11", ("c2", "Sul"), "B"),
        ];
        let tech = SessionUser {
            id: "u".into(),
            name: "T".into(),
            role: Role::Technician,
            cluster_id: Some("c1".into()),
        };
        let admin = SessionUser {
            role: Role::Admin,
            ..tech.clone()
        };

        let ids = |v: Vec<&Diary>| v.iter().map(|d| d.id.clone()).collect::<Vec<_>>();
        let all = ReportPeriod::default();
        assert_eq!(ids(select_diaries(&diaries, &all, Some(&tech))), vec!["d1", "d2"]);
        assert_eq!(ids(select_diaries(&diaries, &all, Some(&admin))), vec!["d1", "d3", "d2"]);
        assert_eq!(ids(select_diaries(&diaries, &all, None)).len(), 3);

        let period = ReportPeriod::between(
            "2024-05-11".parse().unwrap(),
            "2024-05-12".parse().unwrap(),
        );
        assert_eq!(ids(select_diaries(&diaries, &period, Some(&admin))), vec!["d3", "d2"]);

        let half_open = ReportPeriod {
            start: Some("2024-05-12".parse().unwrap()),
            end: None,
        };
        assert_eq!(ids(select_diaries(&diaries, &half_open, None)).len(), 3);
    }

    #[test]
    fn complete_report_header() {
        let diaries = vec![diary("d1", "2024-05-10", ("c1", "Norte"), "A")];
        let refs: Vec<&Diary> = diaries.iter().collect();
        let text = complete_report_text(&refs, &ReportPeriod::default(), &cfg());
        assert!(text.starts_with(
            "RELATÓRIO COMPLETO - TODOS OS DIÁRIOS\nPeríodo: Todos os registros disponíveis\nTotal de diários: 1\n\n"
        ));
        assert!(text.contains(&"=".repeat(100)));
    }

    #[test]
    fn cluster_report_groups() {
        let diaries = vec![
            diary("d1", "2024-05-10", ("c2", "Sul"), "B"),
            diary("d2", "2024-05-10", ("c1", "Norte"), "A"),
        ];
        let refs: Vec<&Diary> = diaries.iter().collect();
        let period = ReportPeriod::between(
            "2024-05-01".parse().unwrap(),
            "2024-05-31".parse().unwrap(),
        );
        let text = cluster_report_text(&refs, &period, &cfg());
        assert!(text.contains("Período: 01/05/2024 a 31/05/2024\n"));
        assert!(text.contains("Clusters: Norte, Sul\n"));
        let norte = text.find("Programação de Equipe - Norte").unwrap();
        let sul = text.find("Programação de Equipe - Sul").unwrap();
        assert!(norte < sul);
        assert_eq!(text.matches(&format!("\n{}\n\n", "=".repeat(55))).count(), 1);
    }

    #[test]
    fn ss_report_dedups_per_plant() {
        let mut a = diary("d1", "2024-05-10", ("c1", "Norte"), "A");
        a.activities = vec![
            activity("X", "08:00", "09:00", Some("SS-2")),
            activity("Y", "09:00", "10:00", Some("SS-1")),
        ];
        let mut b = diary("d2", "2024-05-11", ("c1", "Norte"), "A");
        b.activities = vec![
            activity("X", "08:00", "09:00", Some("SS-2")),
            activity("Z", "10:00", "11:00", Some("  ")),
        ];
        let mut c = diary("d3", "2024-05-11", ("c1", "Norte"), "B");
        c.activities = vec![activity("X", "08:00", "09:00", None)];

        let report = ss_report(&[&a, &b, &c], &cfg());
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].plant_name, "A");
        assert_eq!(report[0].ss_count, 2);
        assert_eq!(report[0].ss_list, vec!["SS-1", "SS-2"]);
    }

    #[test]
    fn hours_report_totals_per_day_and_cluster() {
        let mut a = diary("d1", "2024-05-10", ("c1", "Norte"), "A");
        a.activities = vec![
            activity("X", "08:00", "09:30", None),
            activity("Y", "10:00", "10:45", None),
        ];
        let mut b = diary("d2", "2024-05-10", ("c1", "Norte"), "B");
        b.activities = vec![activity("Z", "13:00", "14:00", None)];

        let report = hours_report(&[&a, &b], &cfg());
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].total_minutes, 195);
        assert_eq!(report[0].total_hours, "3:15");
        assert_eq!(report[0].activities[0].hours, "1:30");
        assert_eq!(report[0].activities.len(), 3);
    }

    #[test]
    fn search_matches_activity_fields_and_plant() {
        let mut a = diary("d1", "2024-05-10", ("c1", "Norte"), "UFV Alfa");
        a.activities = vec![activity("Inversor 3", "08:00", "09:00", Some("SS-77"))];
        let mut b = diary("d2", "2024-05-11", ("c1", "Norte"), "UFV Beta");
        b.activities = vec![activity("Tracker 12", "08:00", "09:00", None)];
        let all = [&a, &b];

        let ids = |found: Vec<&Diary>| found.iter().map(|d| d.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(search_diaries(&all, "inversor", None)), vec!["d1"]);
        assert_eq!(ids(search_diaries(&all, "ss-77", None)), vec!["d1"]);
        assert_eq!(ids(search_diaries(&all, "BETA", None)), vec!["d2"]);
        assert_eq!(ids(search_diaries(&all, "inspeção", None)), vec!["d1", "d2"]);
        assert!(search_diaries(&all, "gerador", None).is_empty());
    }

    #[test]
    fn search_filters_by_day() {
        let a = diary("d1", "2024-05-10", ("c1", "Norte"), "A");
        let b = diary("d2", "2024-05-11", ("c1", "Norte"), "B");
        let day = "2024-05-11".parse().ok();
        let found = search_diaries(&[&a, &b], "", day);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "d2");
        assert_eq!(search_diaries(&[&a, &b], "  ", None).len(), 2);
    }

    #[test]
    fn calendar_event_spans_first_to_last_activity() {
        let mut d = diary("d1", "2024-05-10", ("c1", "Norte"), "A");
        d.activities = vec![
            activity("Inversor 1", "07:30", "09:00", None),
            activity("", "09:00", "10:00", None),
            activity("Tracker 4", "13:00", "15:15", None),
        ];
        let event = calendar_event(&d);
        assert_eq!(event.id, "d1");
        assert_eq!(event.title, "Inversor 1, Tracker 4 - Inspeção, Inspeção, Inspeção");
        assert_eq!(event.start.to_string(), "2024-05-10 07:30:00");
        assert_eq!(event.end.to_string(), "2024-05-10 15:15:00");
    }

    #[test]
    fn calendar_event_defaults_without_activities() {
        let d = diary("d2", "2024-05-11", ("c1", "Norte"), "A");
        let events = calendar_events(&[&d]);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Diário");
        assert_eq!(events[0].start.to_string(), "2024-05-11 08:00:00");
        assert_eq!(events[0].end.to_string(), "2024-05-11 17:00:00");
    }
}
