//! Embedded control-panel page.
//!
//! The device ships a single HTML page; there is no asset pipeline. The
//! inline script mirrors `shutterhub-panel`: the form handler rewrites the
//! submission target from the checkbox selection, and the calibration
//! buttons fire one JSON POST each and darken themselves on success.

use axum::response::Html;

/// The control-panel page.
pub const PANEL_HTML: &str = r#"<!DOCTYPE html><html>
<head>
<title>shutter control</title>
<meta name="viewport" content="width=device-width, initial-scale=1">
<link rel="icon" href="data:,">

<script>
	function sendAbsoluteCommand(form)
	{
		if (!form.living_room_door.checked &&
			!form.living_room_window.checked &&
			!form.bedroom_door.checked &&
			!form.bedroom_window.checked)
		{
			return;
		}
		form.action = "/get?shutter_scale=" + form.shutter_scale.value;
		if (form.living_room_door.checked)
		{
			form.action += ',living_room_door'
		}
		if (form.living_room_window.checked)
		{
			form.action += ',living_room_window'
		}
		if (form.bedroom_door.checked)
		{
			form.action += ',bedroom_door'
		}
		if (form.bedroom_window.checked)
		{
			form.action += ',bedroom_window'
		}
	}

	function calibrate(shutter_num)
	{
		const requestBody = {"please": shutter_num};
		const requestOptions =
		{
			method: 'POST',
			headers: {'Content-Type': 'application/json',
		},
			body: JSON.stringify(requestBody)
		};

		fetch("/api/calibrate", requestOptions)
		.then(res => res.json()).then( data =>
			{
				console.log(data);
				document.getElementById("cal_" + shutter_num).style.background='#000000';
			})
			.catch(function (err)
			{
				console.log("Something went wrong!", err)
			});
	}
</script>

<style>html { font-family: Helvetica; display: inline-block; margin: 0px auto; text-align: center;}
.button {
	border: none; color: white;
	padding: 20px 22px;
	text-decoration: none; font-size: 24px; margin: 2px;
	cursor: pointer;
	width: 70px;
	border-radius: 8px;}
.outer {width:100%; text-align: center; }
.inner {display: inline-block; }
.button.r1{background-color: #66e3e3; }
.button.r2{background-color: white; color: #b9b9b9; border: 2px solid #66e3e3b2;}
.button.r3{background-color: #66e3e3; transform: rotate(180deg);}
.button.cal{background-color: #b9b9b9; font-size: 14px; padding: 10px;}
.button.lg{background-color: #b9b9b9; width: 200px;}
input.largerCheckbox {
width: 40px;
height: 40px;
}
</style></head>

<body style="background-color:#fcfaf2;"><h2>shutter control</h2>
<p>manual control</p>
<div class="outer">
	<div class="inner"><a href="/get?command=3,up"><button class="button r1">&#916;</button></a></div>
	<div class="inner"><a href="/get?command=2,up"><button class="button r1">&#916;</button></a></div>
	<div class="inner"><a href="/get?command=1,up"><button class="button r1">&#916;</button></a></div>
	<div class="inner"><a href="/get?command=0,up"><button class="button r1">&#916;</button></a></div>
</div>
<div class="outer">
	<div class="inner"><a href="/get?command=3,stop"><button class="button r2">&#9634;</button></a></div>
	<div class="inner"><a href="/get?command=2,stop"><button class="button r2">&#9634;</button></a></div>
	<div class="inner"><a href="/get?command=1,stop"><button class="button r2">&#9634;</button></a></div>
	<div class="inner"><a href="/get?command=0,stop"><button class="button r2">&#9634;</button></a></div>
</div>
<div class="outer">
	<div class="inner"><a href="/get?command=3,down"><button class="button r3">&#916;</button></a></div>
	<div class="inner"><a href="/get?command=2,down"><button class="button r3">&#916;</button></a></div>
	<div class="inner"><a href="/get?command=1,down"><button class="button r3">&#916;</button></a></div>
	<div class="inner"><a href="/get?command=0,down"><button class="button r3">&#916;</button></a></div>
</div>
<br/>
<p>calibrate</p>
<div class="outer">
	<div class="inner"><button class="button cal" type="button" id="cal_3" onclick="calibrate('3')">cal 3</button></div>
	<div class="inner"><button class="button cal" type="button" id="cal_2" onclick="calibrate('2')">cal 2</button></div>
	<div class="inner"><button class="button cal" type="button" id="cal_1" onclick="calibrate('1')">cal 1</button></div>
	<div class="inner"><button class="button cal" type="button" id="cal_0" onclick="calibrate('0')">cal 0</button></div>
</div>
<br/>
<p>control multiple shutters</p>
<form name="my_form" onsubmit="return sendAbsoluteCommand(this)">
	<div class="outer">
		<input type="range" name="shutter_scale" min="1" max="100" value="50">
	</div>
	<div class="outer">
		<input type="checkbox" class="largerCheckbox" name="living_room_door">
		<input type="checkbox" class="largerCheckbox" name="living_room_window">
		<input type="checkbox" class="largerCheckbox" name="bedroom_door">
		<input type="checkbox" class="largerCheckbox" name="bedroom_window">
	</div>
	<input class="button lg" type="submit" value="set slider">
</form>
</body>
</html>
"#;

/// `GET /` — the control panel.
pub async fn index() -> Html<&'static str> {
    Html(PANEL_HTML)
}

/// The page returned after every command submission.
#[must_use]
pub fn page() -> Html<&'static str> {
    Html(PANEL_HTML)
}
