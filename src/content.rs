// Static display blocks for each topic. Opaque to the rest of the app: the
// panel mounts the block for the active section and never inspects it.

pub fn render_content(section_id: usize) -> &'static str {
    match section_id {
        0 => CLIENTE,
        1 => RECURSOS,
        2 => NARRATIVA,
        3 => VIABILIDAD,
        4 => SIMBOLOS,
        _ => "",
    }
}

const CLIENTE: &str = "\
<p>Profesionales urbanos de 28 a 45 años con agendas saturadas, que buscan \
desconexión sin el coste logístico de un viaje largo.</p>\
<ul><li>Escapadas de menos de 90 minutos</li>\
<li>Valoran la calma por encima del lujo</li>\
<li>Deciden en el móvil, reservan en días</li></ul>";

const RECURSOS: &str = "\
<p>Una estética de la intimidad: luz cálida, materiales honestos, silencio \
como recurso de diseño.</p>\
<ul><li>Paleta tierra y ámbar</li>\
<li>Fotografía de cerca, sin horizontes</li>\
<li>Tipografía serif pausada</li></ul>";

const NARRATIVA: &str = "\
<p>Una historia contada en capas: cada canal aporta una pieza del mismo \
mapa de proximidad.</p>\
<ul><li>Piezas cortas en redes</li>\
<li>Audio ambiental para la espera</li>\
<li>Cartas físicas tras la estancia</li></ul>";

const VIABILIDAD: &str = "\
<p>Modelo asset light: alianzas con alojamientos existentes en lugar de \
inmuebles propios.</p>\
<ul><li>Riesgo de dependencia de socios: medio</li>\
<li>Riesgo de estacionalidad: bajo</li>\
<li>Riesgo de imitación: alto, mitigado por marca</li></ul>";

const SIMBOLOS: &str = "\
<p>El punto, el anillo y el camino: la cercanía como lenguaje visual.</p>\
<ul><li>El punto: el lugar que ya conoces</li>\
<li>El anillo: la distancia que se camina</li>\
<li>El camino: lo que cambia al volver</li></ul>";
