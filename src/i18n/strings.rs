//! Built-in resource tables for the neutral (English) and French locales.
//!
//! Each entry maps a resource key to a template. Templates use `{0}` as the
//! placeholder for the count. Count-dependent keys come in three flavours:
//! the bare key (singular), `<key>Plural` and `<key>Zero`.

/// A static table of resource key/template pairs for one locale.
pub type ResourceTable = &'static [(&'static str, &'static str)];

// ==================== English Strings ====================

/// Neutral resources. These back every locale that has no table of its own.
pub const ENGLISH_RESOURCES: ResourceTable = &[
    // Sentinels
    ("DateTimeNow", "now"),
    ("DateTimeNever", "never"),
    ("DateTimeZero", "no time"),
    ("DateTimeTomorrow", "tomorrow"),
    ("DateTimeYesterday", "yesterday"),
    // Past
    ("DateTimePastMillisecond", "one millisecond ago"),
    ("DateTimePastMillisecondPlural", "{0} milliseconds ago"),
    ("DateTimePastSecond", "one second ago"),
    ("DateTimePastSecondPlural", "{0} seconds ago"),
    ("DateTimePastMinute", "a minute ago"),
    ("DateTimePastMinutePlural", "{0} minutes ago"),
    ("DateTimePastHour", "an hour ago"),
    ("DateTimePastHourPlural", "{0} hours ago"),
    ("DateTimePastDay", "yesterday"),
    ("DateTimePastDayPlural", "{0} days ago"),
    ("DateTimePastWeek", "a week ago"),
    ("DateTimePastWeekPlural", "{0} weeks ago"),
    ("DateTimePastMonth", "one month ago"),
    ("DateTimePastMonthPlural", "{0} months ago"),
    ("DateTimePastYear", "one year ago"),
    ("DateTimePastYearPlural", "{0} years ago"),
    // Future
    ("DateTimeFutureMillisecond", "in one millisecond"),
    ("DateTimeFutureMillisecondPlural", "in {0} milliseconds"),
    ("DateTimeFutureSecond", "in one second"),
    ("DateTimeFutureSecondPlural", "in {0} seconds"),
    ("DateTimeFutureMinute", "in a minute"),
    ("DateTimeFutureMinutePlural", "in {0} minutes"),
    ("DateTimeFutureHour", "in an hour"),
    ("DateTimeFutureHourPlural", "in {0} hours"),
    ("DateTimeFutureDay", "tomorrow"),
    ("DateTimeFutureDayPlural", "in {0} days"),
    ("DateTimeFutureWeek", "in a week"),
    ("DateTimeFutureWeekPlural", "in {0} weeks"),
    ("DateTimeFutureMonth", "in one month"),
    ("DateTimeFutureMonthPlural", "in {0} months"),
    ("DateTimeFutureYear", "in one year"),
    ("DateTimeFutureYearPlural", "in {0} years"),
    // Durations
    ("TimeSpanMillisecond", "{0} millisecond"),
    ("TimeSpanMillisecondPlural", "{0} milliseconds"),
    ("TimeSpanSecond", "{0} second"),
    ("TimeSpanSecondPlural", "{0} seconds"),
    ("TimeSpanMinute", "{0} minute"),
    ("TimeSpanMinutePlural", "{0} minutes"),
    ("TimeSpanHour", "{0} hour"),
    ("TimeSpanHourPlural", "{0} hours"),
    ("TimeSpanDay", "{0} day"),
    ("TimeSpanDayPlural", "{0} days"),
    ("TimeSpanWeek", "{0} week"),
    ("TimeSpanWeekPlural", "{0} weeks"),
    ("TimeSpanMonth", "{0} month"),
    ("TimeSpanMonthPlural", "{0} months"),
    ("TimeSpanYear", "{0} year"),
    ("TimeSpanYearPlural", "{0} years"),
    // Enum names
    ("TimeUnitMillisecond", "millisecond"),
    ("TimeUnitMillisecondAbbreviation", "ms"),
    ("TimeUnitSecond", "second"),
    ("TimeUnitSecondAbbreviation", "s"),
    ("TimeUnitMinute", "minute"),
    ("TimeUnitMinuteAbbreviation", "min"),
    ("TimeUnitHour", "hour"),
    ("TimeUnitHourAbbreviation", "h"),
    ("TimeUnitDay", "day"),
    ("TimeUnitDayAbbreviation", "d"),
    ("TimeUnitWeek", "week"),
    ("TimeUnitWeekAbbreviation", "wk"),
    ("TimeUnitMonth", "month"),
    ("TimeUnitMonthAbbreviation", "mo"),
    ("TimeUnitYear", "year"),
    ("TimeUnitYearAbbreviation", "y"),
];

// ==================== French Strings ====================

pub const FRENCH_RESOURCES: ResourceTable = &[
    // Sentinels
    ("DateTimeNow", "maintenant"),
    ("DateTimeNever", "jamais"),
    ("DateTimeZero", "temps nul"),
    ("DateTimeTomorrow", "demain"),
    ("DateTimeYesterday", "hier"),
    // Past
    ("DateTimePastMillisecond", "il y a {0} milliseconde"),
    ("DateTimePastMillisecondPlural", "il y a {0} millisecondes"),
    ("DateTimePastSecond", "il y a {0} seconde"),
    ("DateTimePastSecondPlural", "il y a {0} secondes"),
    ("DateTimePastMinute", "il y a {0} minute"),
    ("DateTimePastMinutePlural", "il y a {0} minutes"),
    ("DateTimePastHour", "il y a {0} heure"),
    ("DateTimePastHourPlural", "il y a {0} heures"),
    ("DateTimePastDay", "hier"),
    ("DateTimePastDayPlural", "il y a {0} jours"),
    ("DateTimePastWeek", "il y a {0} semaine"),
    ("DateTimePastWeekPlural", "il y a {0} semaines"),
    ("DateTimePastMonth", "il y a {0} mois"),
    ("DateTimePastMonthPlural", "il y a {0} mois"),
    ("DateTimePastYear", "il y a {0} an"),
    ("DateTimePastYearPlural", "il y a {0} ans"),
    // Future
    ("DateTimeFutureMillisecond", "dans {0} milliseconde"),
    ("DateTimeFutureMillisecondPlural", "dans {0} millisecondes"),
    ("DateTimeFutureSecond", "dans {0} seconde"),
    ("DateTimeFutureSecondPlural", "dans {0} secondes"),
    ("DateTimeFutureMinute", "dans {0} minute"),
    ("DateTimeFutureMinutePlural", "dans {0} minutes"),
    ("DateTimeFutureHour", "dans {0} heure"),
    ("DateTimeFutureHourPlural", "dans {0} heures"),
    ("DateTimeFutureDay", "demain"),
    ("DateTimeFutureDayPlural", "dans {0} jours"),
    ("DateTimeFutureWeek", "dans {0} semaine"),
    ("DateTimeFutureWeekPlural", "dans {0} semaines"),
    ("DateTimeFutureMonth", "dans {0} mois"),
    ("DateTimeFutureMonthPlural", "dans {0} mois"),
    ("DateTimeFutureYear", "dans {0} an"),
    ("DateTimeFutureYearPlural", "dans {0} ans"),
    // Durations
    ("TimeSpanMillisecond", "{0} milliseconde"),
    ("TimeSpanMillisecondPlural", "{0} millisecondes"),
    ("TimeSpanSecond", "{0} seconde"),
    ("TimeSpanSecondPlural", "{0} secondes"),
    ("TimeSpanMinute", "{0} minute"),
    ("TimeSpanMinutePlural", "{0} minutes"),
    ("TimeSpanHour", "{0} heure"),
    ("TimeSpanHourPlural", "{0} heures"),
    ("TimeSpanDay", "{0} jour"),
    ("TimeSpanDayPlural", "{0} jours"),
    ("TimeSpanWeek", "{0} semaine"),
    ("TimeSpanWeekPlural", "{0} semaines"),
    ("TimeSpanMonth", "{0} mois"),
    ("TimeSpanMonthPlural", "{0} mois"),
    ("TimeSpanYear", "{0} an"),
    ("TimeSpanYearPlural", "{0} ans"),
    // Enum names
    ("TimeUnitMillisecond", "milliseconde"),
    ("TimeUnitSecond", "seconde"),
    ("TimeUnitMinute", "minute"),
    ("TimeUnitHour", "heure"),
    ("TimeUnitDay", "jour"),
    ("TimeUnitDayAbbreviation", "j"),
    ("TimeUnitWeek", "semaine"),
    ("TimeUnitWeekAbbreviation", "sem."),
    ("TimeUnitMonth", "mois"),
    ("TimeUnitMonthAbbreviation", "mois"),
    ("TimeUnitYear", "année"),
    ("TimeUnitYearAbbreviation", "an"),
    ("TensePast", "passé"),
    ("TenseFuture", "futur"),
];
